use super::super::domain::{OnboardingSection, StepStatus};
use super::super::profile::{
    CommercialAndOperationalInformation, CompanyHistory, CompanyInformation,
    GroupCompanyStructure, RegistryInformation, StructuralInformation,
};
use super::{FieldCheck, SectionAssessment, SectionRules};

impl SectionRules for CompanyInformation {
    const SECTION: OnboardingSection = OnboardingSection::CompanyInformation;

    fn field_checks(&self) -> Vec<FieldCheck> {
        vec![
            FieldCheck::required("TradeName", &self.trade_name),
            FieldCheck::required("TaxNumber", &self.tax_number),
            FieldCheck::required("TaxOffice", &self.tax_office),
            FieldCheck::required("EstablishmentDate", &self.establishment_date),
            FieldCheck::required("LegalForm", &self.legal_form),
            FieldCheck::required("Phone", &self.phone),
            FieldCheck::required("Email", &self.email),
            FieldCheck::required("Address", &self.address),
            FieldCheck::required("City", &self.city),
            FieldCheck::optional("District", &self.district),
            FieldCheck::optional("Website", &self.website),
            FieldCheck::optional("Fax", &self.fax),
            FieldCheck::optional("PaidInCapital", &self.paid_in_capital),
        ]
    }
}

impl SectionRules for CommercialAndOperationalInformation {
    const SECTION: OnboardingSection = OnboardingSection::CommercialAndOperational;

    fn field_checks(&self) -> Vec<FieldCheck> {
        vec![
            FieldCheck::required_list("NaceCodes", &self.nace_codes),
            FieldCheck::required("MainActivity", &self.main_activity),
            FieldCheck::required("EmployeeCount", &self.employee_count),
            FieldCheck::required_list("Banks", &self.banks),
            FieldCheck::optional("MainCustomers", &self.main_customers),
            FieldCheck::optional("MainSuppliers", &self.main_suppliers),
            FieldCheck::optional("ExportRatio", &self.export_ratio),
            FieldCheck::optional("ImportRatio", &self.import_ratio),
            FieldCheck::optional("SectorExperienceYears", &self.sector_experience_years),
        ]
    }
}

impl SectionRules for RegistryInformation {
    const SECTION: OnboardingSection = OnboardingSection::Registry;

    fn field_checks(&self) -> Vec<FieldCheck> {
        vec![
            FieldCheck::required("TradeRegistryNumber", &self.trade_registry_number),
            FieldCheck::required("TradeRegistryOffice", &self.trade_registry_office),
            FieldCheck::required("RegistrationDate", &self.registration_date),
            FieldCheck::required("MersisNumber", &self.mersis_number),
            FieldCheck::required("RegisteredCapital", &self.registered_capital),
            FieldCheck::optional("ChamberOfCommerce", &self.chamber_of_commerce),
            FieldCheck::optional("GazetteDate", &self.gazette_date),
            FieldCheck::optional("GazetteNumber", &self.gazette_number),
        ]
    }
}

impl SectionRules for CompanyHistory {
    const SECTION: OnboardingSection = OnboardingSection::CompanyHistory;

    fn field_checks(&self) -> Vec<FieldCheck> {
        vec![
            FieldCheck::required_list("Founders", &self.founders),
            FieldCheck::required("HistorySummary", &self.history_summary),
            FieldCheck::optional("Milestones", &self.milestones),
            FieldCheck::optional("PreviousTradeNames", &self.previous_trade_names),
        ]
    }
}

impl SectionRules for StructuralInformation {
    const SECTION: OnboardingSection = OnboardingSection::Structural;

    fn field_checks(&self) -> Vec<FieldCheck> {
        vec![
            FieldCheck::required("HeadquartersOwnership", &self.headquarters_ownership),
            FieldCheck::required("FacilityArea", &self.facility_area),
            FieldCheck::required_list("Shareholders", &self.shareholders),
            FieldCheck::optional("BranchCount", &self.branch_count),
            FieldCheck::optional("WarehouseCount", &self.warehouse_count),
            FieldCheck::optional("PremisesAddress", &self.premises_address),
        ]
    }
}

/// Never mandatory: reported as `Optional` whatever it contains.
impl SectionRules for GroupCompanyStructure {
    const SECTION: OnboardingSection = OnboardingSection::GroupCompanyStructure;

    fn field_checks(&self) -> Vec<FieldCheck> {
        vec![FieldCheck::optional("GroupCompanies", &self.group_companies)]
    }

    fn assess(&self) -> SectionAssessment {
        SectionAssessment {
            section: Self::SECTION,
            status: StepStatus::Optional,
            missing_fields: Vec::new(),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::wire::{lenient_number, lenient_text, lenient_text_list, null_as_empty, parse_date};
use chrono::NaiveDate;

/// Snapshot returned by the "get onboarding data" endpoint.
///
/// Every section is optional and each one may be partially filled in; the
/// completion engine only ever reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompanyProfile {
    pub company_information: Option<CompanyInformation>,
    pub commercial_and_operational_information: Option<CommercialAndOperationalInformation>,
    pub registry_information: Option<RegistryInformation>,
    pub company_history: Option<CompanyHistory>,
    pub current_management_staff: Option<CurrentManagementStaff>,
    pub structural_information: Option<StructuralInformation>,
    pub group_company_structure: Option<GroupCompanyStructure>,
}

impl CompanyProfile {
    /// Founding date used to decide which annual returns can exist.
    /// Unparseable dates are treated as unknown.
    pub fn founding_date(&self) -> Option<NaiveDate> {
        self.company_information
            .as_ref()
            .and_then(|info| info.establishment_date.as_deref())
            .and_then(parse_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompanyInformation {
    #[serde(deserialize_with = "lenient_text")]
    pub trade_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub tax_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub tax_office: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub establishment_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub legal_form: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub district: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub website: Option<String>,
    /// Legacy contact channel still returned by older records.
    #[serde(deserialize_with = "lenient_text")]
    pub fax: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub paid_in_capital: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CommercialAndOperationalInformation {
    #[serde(deserialize_with = "lenient_text_list")]
    pub nace_codes: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub main_activity: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub employee_count: Option<f64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub banks: Vec<BankRelationship>,
    #[serde(deserialize_with = "lenient_text_list")]
    pub main_customers: Vec<String>,
    #[serde(deserialize_with = "lenient_text_list")]
    pub main_suppliers: Vec<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub export_ratio: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub import_ratio: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub sector_experience_years: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BankRelationship {
    #[serde(deserialize_with = "lenient_text")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub branch_name: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub credit_limit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegistryInformation {
    #[serde(deserialize_with = "lenient_text")]
    pub trade_registry_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub trade_registry_office: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub registration_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub mersis_number: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub registered_capital: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub chamber_of_commerce: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub gazette_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub gazette_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompanyHistory {
    #[serde(deserialize_with = "null_as_empty")]
    pub founders: Vec<Founder>,
    #[serde(deserialize_with = "lenient_text")]
    pub history_summary: Option<String>,
    #[serde(deserialize_with = "lenient_text_list")]
    pub milestones: Vec<String>,
    #[serde(deserialize_with = "lenient_text_list")]
    pub previous_trade_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Founder {
    #[serde(deserialize_with = "lenient_text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub share_ratio: Option<f64>,
}

/// Management roster. Arrives on the wire as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentManagementStaff {
    pub members: Vec<ManagementMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ManagementMember {
    #[serde(deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub national_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub birth_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub education_level: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub experience_years: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StructuralInformation {
    #[serde(deserialize_with = "lenient_text")]
    pub headquarters_ownership: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub facility_area: Option<f64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub shareholders: Vec<Shareholder>,
    #[serde(deserialize_with = "lenient_number")]
    pub branch_count: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub warehouse_count: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub premises_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Shareholder {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub share_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupCompanyStructure {
    #[serde(deserialize_with = "null_as_empty")]
    pub group_companies: Vec<GroupCompany>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupCompany {
    #[serde(deserialize_with = "lenient_text")]
    pub trade_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub tax_number: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub ownership_ratio: Option<f64>,
}

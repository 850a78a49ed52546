use chrono::NaiveDate;

use crate::workflows::onboarding::documents::{DocumentLabel, FinancialDocument};
use crate::workflows::onboarding::profile::{
    BankRelationship, CommercialAndOperationalInformation, CompanyHistory, CompanyInformation,
    CompanyProfile, CurrentManagementStaff, Founder, GroupCompany, GroupCompanyStructure,
    ManagementMember, RegistryInformation, Shareholder, StructuralInformation,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Evaluation date used across the suite: bucket 2, previous window 2024/1.
pub(super) fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub(super) fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub(super) fn company_information() -> CompanyInformation {
    CompanyInformation {
        trade_name: text("Anadolu Tekstil A.S."),
        tax_number: text("1234567890"),
        tax_office: text("Kadikoy"),
        establishment_date: text("2015-04-01T00:00:00"),
        legal_form: text("Joint Stock Company"),
        phone: text("+90 216 555 00 00"),
        email: text("finance@anadolutekstil.example"),
        address: text("Organize Sanayi Bolgesi 4. Cadde No:12"),
        city: text("Istanbul"),
        ..CompanyInformation::default()
    }
}

pub(super) fn commercial_information() -> CommercialAndOperationalInformation {
    CommercialAndOperationalInformation {
        nace_codes: vec!["13.20".to_string()],
        main_activity: text("Weaving of textiles"),
        employee_count: Some(140.0),
        banks: vec![BankRelationship {
            bank_name: text("Ziraat"),
            branch_name: text("Kadikoy"),
            credit_limit: Some(2_500_000.0),
        }],
        ..CommercialAndOperationalInformation::default()
    }
}

pub(super) fn registry_information() -> RegistryInformation {
    RegistryInformation {
        trade_registry_number: text("987654"),
        trade_registry_office: text("Istanbul"),
        registration_date: text("2015-04-10"),
        mersis_number: text("0123456789000015"),
        registered_capital: Some(5_000_000.0),
        ..RegistryInformation::default()
    }
}

pub(super) fn company_history() -> CompanyHistory {
    CompanyHistory {
        founders: vec![Founder {
            full_name: text("Mehmet Yilmaz"),
            share_ratio: Some(60.0),
        }],
        history_summary: text("Family-owned weaving mill, export focused since 2018."),
        ..CompanyHistory::default()
    }
}

pub(super) fn member(first: &str, last: &str, role: &str) -> ManagementMember {
    ManagementMember {
        first_name: text(first),
        last_name: text(last),
        role: text(role),
        ..ManagementMember::default()
    }
}

pub(super) fn management() -> CurrentManagementStaff {
    CurrentManagementStaff {
        members: vec![
            member("Ayse", "Demir", "Chief Executive Officer"),
            member("Can", "Ozturk", "Chief Financial Officer"),
        ],
    }
}

pub(super) fn structural_information() -> StructuralInformation {
    StructuralInformation {
        headquarters_ownership: text("owned"),
        facility_area: Some(12_000.0),
        shareholders: vec![Shareholder {
            name: text("Mehmet Yilmaz"),
            share_ratio: Some(60.0),
        }],
        ..StructuralInformation::default()
    }
}

pub(super) fn group_structure() -> GroupCompanyStructure {
    GroupCompanyStructure {
        group_companies: vec![GroupCompany {
            trade_name: text("Anadolu Lojistik Ltd."),
            tax_number: text("1112223334"),
            ownership_ratio: Some(100.0),
        }],
    }
}

pub(super) fn complete_profile() -> CompanyProfile {
    CompanyProfile {
        company_information: Some(company_information()),
        commercial_and_operational_information: Some(commercial_information()),
        registry_information: Some(registry_information()),
        company_history: Some(company_history()),
        current_management_staff: Some(management()),
        structural_information: Some(structural_information()),
        group_company_structure: Some(group_structure()),
    }
}

pub(super) fn upload(
    label: DocumentLabel,
    year: Option<i32>,
    quarter: Option<u8>,
    status: i32,
) -> FinancialDocument {
    FinancialDocument::new(label.id(), year, quarter, status)
}

/// Every mandatory slot for `today()` uploaded and approved.
pub(super) fn approved_documents() -> Vec<FinancialDocument> {
    vec![
        upload(DocumentLabel::AnnualTaxReturn, Some(2023), None, 1),
        upload(DocumentLabel::AnnualTaxReturn, Some(2022), None, 6),
        upload(DocumentLabel::InterimTaxReturn, Some(2024), Some(1), 1),
        upload(DocumentLabel::TrialBalance, Some(2024), Some(1), 1),
    ]
}

use super::common::*;
use crate::workflows::onboarding::completion::{
    assess_section, classify, FieldCheck, SectionRules,
};
use crate::workflows::onboarding::domain::StepStatus;
use crate::workflows::onboarding::profile::{
    CommercialAndOperationalInformation, CompanyHistory, CompanyInformation,
    CurrentManagementStaff, GroupCompanyStructure, ManagementMember, RegistryInformation,
    StructuralInformation,
};

#[test]
fn absent_sections_are_not_started() {
    assert_eq!(
        assess_section::<CompanyInformation>(None).status,
        StepStatus::NotStarted
    );
    assert_eq!(
        assess_section::<CommercialAndOperationalInformation>(None).status,
        StepStatus::NotStarted
    );
    assert_eq!(
        assess_section::<RegistryInformation>(None).status,
        StepStatus::NotStarted
    );
    assert_eq!(
        assess_section::<CompanyHistory>(None).status,
        StepStatus::NotStarted
    );
    assert_eq!(
        assess_section::<CurrentManagementStaff>(None).status,
        StepStatus::NotStarted
    );
    assert_eq!(
        assess_section::<StructuralInformation>(None).status,
        StepStatus::NotStarted
    );
}

#[test]
fn complete_sections_are_completed() {
    assert_eq!(company_information().assess().status, StepStatus::Completed);
    assert_eq!(commercial_information().assess().status, StepStatus::Completed);
    assert_eq!(registry_information().assess().status, StepStatus::Completed);
    assert_eq!(company_history().assess().status, StepStatus::Completed);
    assert_eq!(management().assess().status, StepStatus::Completed);
    assert_eq!(structural_information().assess().status, StepStatus::Completed);
    assert!(company_information().assess().missing_fields.is_empty());
}

#[test]
fn blank_strings_do_not_count_as_data() {
    let section = CompanyInformation {
        trade_name: text("   "),
        email: text(""),
        ..CompanyInformation::default()
    };

    assert_eq!(section.assess().status, StepStatus::NotStarted);
}

#[test]
fn optional_field_alone_starts_the_section() {
    let section = CompanyInformation {
        website: text("https://anadolutekstil.example"),
        ..CompanyInformation::default()
    };

    let assessment = section.assess();
    assert_eq!(assessment.status, StepStatus::Started);
    assert!(assessment.missing_fields.contains(&"TradeName".to_string()));
}

#[test]
fn zero_is_a_value_but_nan_is_not() {
    let mut section = registry_information();
    section.registered_capital = Some(0.0);
    assert_eq!(section.assess().status, StepStatus::Completed);

    section.registered_capital = Some(f64::NAN);
    let assessment = section.assess();
    assert_eq!(assessment.status, StepStatus::Started);
    assert_eq!(assessment.missing_fields, vec!["RegisteredCapital".to_string()]);

    let only_nan = RegistryInformation {
        registered_capital: Some(f64::NAN),
        ..RegistryInformation::default()
    };
    assert_eq!(only_nan.assess().status, StepStatus::NotStarted);
}

#[test]
fn required_lists_need_at_least_one_entry() {
    let mut section = commercial_information();
    section.nace_codes.clear();
    let assessment = section.assess();
    assert_eq!(assessment.status, StepStatus::Started);
    assert_eq!(assessment.missing_fields, vec!["NaceCodes".to_string()]);

    let mut history = company_history();
    history.founders.clear();
    assert_eq!(history.assess().status, StepStatus::Started);

    let mut commercial = commercial_information();
    commercial.banks.clear();
    assert_eq!(commercial.assess().missing_fields, vec!["Banks".to_string()]);
}

#[test]
fn filling_required_fields_only_moves_forward() {
    let target = company_information();
    let mut section = CompanyInformation::default();
    let mut previous_rank = section.assess().status.progress_rank().expect("ranked");

    type Fill = fn(&mut CompanyInformation, &CompanyInformation);
    let steps: [Fill; 9] = [
        |s: &mut CompanyInformation, t: &CompanyInformation| s.trade_name = t.trade_name.clone(),
        |s: &mut CompanyInformation, t: &CompanyInformation| s.tax_number = t.tax_number.clone(),
        |s: &mut CompanyInformation, t: &CompanyInformation| s.tax_office = t.tax_office.clone(),
        |s: &mut CompanyInformation, t: &CompanyInformation| {
            s.establishment_date = t.establishment_date.clone()
        },
        |s: &mut CompanyInformation, t: &CompanyInformation| s.legal_form = t.legal_form.clone(),
        |s: &mut CompanyInformation, t: &CompanyInformation| s.phone = t.phone.clone(),
        |s: &mut CompanyInformation, t: &CompanyInformation| s.email = t.email.clone(),
        |s: &mut CompanyInformation, t: &CompanyInformation| s.address = t.address.clone(),
        |s: &mut CompanyInformation, t: &CompanyInformation| s.city = t.city.clone(),
    ];

    for step in steps {
        step(&mut section, &target);
        let rank = section.assess().status.progress_rank().expect("ranked");
        assert!(rank >= previous_rank, "status regressed");
        previous_rank = rank;
    }

    assert_eq!(section.assess().status, StepStatus::Completed);
}

#[test]
fn classification_is_a_strict_partition() {
    let samples = [
        CompanyHistory::default(),
        CompanyHistory {
            milestones: vec!["ISO 9001".to_string()],
            ..CompanyHistory::default()
        },
        CompanyHistory {
            history_summary: text("summary"),
            ..CompanyHistory::default()
        },
        company_history(),
    ];

    let statuses: Vec<StepStatus> = samples.iter().map(|sample| sample.assess().status).collect();
    assert_eq!(
        statuses,
        vec![
            StepStatus::NotStarted,
            StepStatus::Started,
            StepStatus::Started,
            StepStatus::Completed,
        ]
    );
}

#[test]
fn classify_treats_lists_and_scalars_alike() {
    let empty: Vec<String> = Vec::new();
    let checks = vec![
        FieldCheck::required_list("Items", &empty),
        FieldCheck::optional("Note", &text("x")),
    ];
    assert_eq!(classify(&checks), StepStatus::Started);
    assert_eq!(classify(&[]), StepStatus::NotStarted);
}

#[test]
fn empty_roster_is_not_started() {
    let assessment = CurrentManagementStaff::default().assess();
    assert_eq!(assessment.status, StepStatus::NotStarted);
    assert_eq!(assessment.missing_fields, vec!["Members".to_string()]);
}

#[test]
fn one_incomplete_member_keeps_roster_started() {
    let mut roster = management();
    roster.members.push(ManagementMember {
        first_name: text("Elif"),
        last_name: text("Kaya"),
        ..ManagementMember::default()
    });

    let assessment = roster.assess();
    assert_eq!(assessment.status, StepStatus::Started);
    assert_eq!(assessment.missing_fields, vec!["Members[2].Role".to_string()]);
}

#[test]
fn blank_member_row_keeps_roster_started() {
    let mut roster = management();
    roster.members.push(ManagementMember::default());

    assert_eq!(ManagementMember::default().status(), StepStatus::NotStarted);
    assert_eq!(roster.assess().status, StepStatus::Started);
}

#[test]
fn member_optional_fields_do_not_complete_a_member() {
    let member = ManagementMember {
        national_id: text("12345678901"),
        experience_years: Some(0.0),
        ..ManagementMember::default()
    };

    assert_eq!(member.status(), StepStatus::Started);
}

#[test]
fn group_structure_is_always_optional() {
    assert_eq!(
        assess_section::<GroupCompanyStructure>(None).status,
        StepStatus::Optional
    );
    assert_eq!(
        GroupCompanyStructure::default().assess().status,
        StepStatus::Optional
    );
    assert_eq!(group_structure().assess().status, StepStatus::Optional);
}

use crate::infra::{resolve_today, ReferenceDateSource};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use credit_onboarding::config::AppConfig;
use credit_onboarding::error::AppError;
use credit_onboarding::workflows::onboarding::documents::period::previous_period;
use credit_onboarding::workflows::onboarding::documents::{DocumentLabel, DocumentStatus};
use credit_onboarding::workflows::onboarding::profile::{
    BankRelationship, CommercialAndOperationalInformation, CompanyHistory, CompanyInformation,
    CurrentManagementStaff, Founder, ManagementMember, RegistryInformation, Shareholder,
    StructuralInformation,
};
use credit_onboarding::workflows::onboarding::{
    CompanyProfile, CompletionEngine, FinancialDocument, OnboardingPayloadLoader,
    OnboardingReport,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct StatusArgs {
    /// JSON file holding `profile` and `documents` as returned by the onboarding API
    #[arg(long)]
    pub(crate) payload: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to APP_REFERENCE_DATE, then today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to APP_REFERENCE_DATE, then today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_status_report(args: StatusArgs) -> Result<(), AppError> {
    let StatusArgs {
        payload,
        today,
        json,
    } = args;

    let config = AppConfig::load()?;
    let (today, source) = resolve_today(today, &config.engine);
    let payload = OnboardingPayloadLoader::from_path(&payload)?;

    let report = CompletionEngine::new(today).report(payload.profile.as_ref(), &payload.documents);

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_report(&report, source);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (today, source) = resolve_today(args.today, &config.engine);
    let engine = CompletionEngine::new(today);

    println!("Credit onboarding demo");

    println!("\n== Before any data entry ==");
    render_report(&engine.report(None, &[]), source);

    let mut profile = demo_profile();
    let mut documents = demo_uploads(today);
    println!("\n== Profile drafted, first uploads in review ==");
    render_report(&engine.report(Some(&profile), &documents), source);

    complete_demo_profile(&mut profile);
    for document in &mut documents {
        document.status = DocumentStatus::Approved.code();
    }
    let report = engine.report(Some(&profile), &documents);
    documents.extend(missing_uploads(&report));
    println!("\n== Every section filled, all required documents approved ==");
    render_report(&engine.report(Some(&profile), &documents), source);

    Ok(())
}

pub(crate) fn render_report(report: &OnboardingReport, source: ReferenceDateSource) {
    let source_label = match source {
        ReferenceDateSource::Request => "command line",
        ReferenceDateSource::Configuration => "APP_REFERENCE_DATE",
        ReferenceDateSource::Clock => "system clock",
    };
    println!("Evaluated {} ({})", report.today, source_label);
    println!(
        "Filing window: current {}/{} | documents due for {}/{}",
        report.periods.current.year,
        report.periods.current.quarter,
        report.periods.previous.year,
        report.periods.previous.quarter
    );

    println!("\nSections");
    for entry in &report.sections {
        let status = entry.status_label.unwrap_or("-");
        if entry.missing_fields.is_empty() {
            println!("- {}: {}", entry.label, status);
        } else {
            println!(
                "- {}: {} (missing: {})",
                entry.label,
                status,
                entry.missing_fields.join(", ")
            );
        }
    }

    println!("\nFinancial documents");
    for row in &report.documents {
        let period = match (row.year, row.quarter) {
            (Some(year), Some(quarter)) => format!("{year}/{quarter}"),
            (Some(year), None) => year.to_string(),
            _ => "any period".to_string(),
        };
        let requirement = if row.is_required {
            "required"
        } else {
            "optional"
        };
        let state = match (row.status, row.review_status) {
            (Some(bucket), Some(review)) => format!("{} ({})", bucket.label(), review.label()),
            (Some(bucket), None) => bucket.label().to_string(),
            (None, _) => "not uploaded".to_string(),
        };
        println!("- {} {} [{}]: {}", row.label_name, period, requirement, state);
    }

    println!("\nOverall onboarding: {}", report.summary.label());
}

fn demo_profile() -> CompanyProfile {
    CompanyProfile {
        company_information: Some(CompanyInformation {
            trade_name: Some("Anadolu Tekstil A.S.".to_string()),
            tax_number: Some("1234567890".to_string()),
            tax_office: Some("Kadikoy".to_string()),
            establishment_date: Some("2015-04-01T00:00:00".to_string()),
            legal_form: Some("Joint Stock Company".to_string()),
            city: Some("Istanbul".to_string()),
            ..CompanyInformation::default()
        }),
        registry_information: Some(RegistryInformation {
            trade_registry_number: Some("987654".to_string()),
            trade_registry_office: Some("Istanbul".to_string()),
            registration_date: Some("2015-04-10".to_string()),
            mersis_number: Some("0123456789000015".to_string()),
            registered_capital: Some(5_000_000.0),
            ..RegistryInformation::default()
        }),
        current_management_staff: Some(CurrentManagementStaff {
            members: vec![ManagementMember {
                first_name: Some("Ayse".to_string()),
                last_name: Some("Demir".to_string()),
                ..ManagementMember::default()
            }],
        }),
        ..CompanyProfile::default()
    }
}

fn complete_demo_profile(profile: &mut CompanyProfile) {
    if let Some(company) = profile.company_information.as_mut() {
        company.phone = Some("+90 216 555 00 00".to_string());
        company.email = Some("finance@anadolutekstil.example".to_string());
        company.address = Some("Organize Sanayi Bolgesi 4. Cadde No:12".to_string());
    }

    profile.commercial_and_operational_information = Some(CommercialAndOperationalInformation {
        nace_codes: vec!["13.20".to_string()],
        main_activity: Some("Weaving of textiles".to_string()),
        employee_count: Some(140.0),
        banks: vec![BankRelationship {
            bank_name: Some("Ziraat".to_string()),
            branch_name: Some("Kadikoy".to_string()),
            credit_limit: Some(2_500_000.0),
        }],
        ..CommercialAndOperationalInformation::default()
    });

    profile.company_history = Some(CompanyHistory {
        founders: vec![Founder {
            full_name: Some("Mehmet Yilmaz".to_string()),
            share_ratio: Some(60.0),
        }],
        history_summary: Some("Family-owned weaving mill, export focused since 2018.".to_string()),
        ..CompanyHistory::default()
    });

    if let Some(staff) = profile.current_management_staff.as_mut() {
        for member in &mut staff.members {
            member.role = Some("Chief Executive Officer".to_string());
        }
    }

    profile.structural_information = Some(StructuralInformation {
        headquarters_ownership: Some("owned".to_string()),
        facility_area: Some(12_000.0),
        shareholders: vec![Shareholder {
            name: Some("Mehmet Yilmaz".to_string()),
            share_ratio: Some(60.0),
        }],
        ..StructuralInformation::default()
    });
}

fn demo_uploads(today: NaiveDate) -> Vec<FinancialDocument> {
    let uploaded_at: Option<NaiveDateTime> = today.and_hms_opt(9, 30, 0);
    let previous = previous_period(today);

    let mut interim = FinancialDocument::new(
        DocumentLabel::InterimTaxReturn.id(),
        Some(previous.year),
        Some(previous.quarter),
        DocumentStatus::AwaitingApproval.code(),
    );
    interim.id = Some(101);
    interim.updated_at = uploaded_at;

    let mut statement = FinancialDocument::new(
        DocumentLabel::BankStatement.id(),
        Some(previous.year),
        Some(previous.quarter),
        DocumentStatus::AwaitingControl.code(),
    );
    statement.id = Some(102);
    statement.updated_at = uploaded_at;

    vec![interim, statement]
}

fn missing_uploads(report: &OnboardingReport) -> Vec<FinancialDocument> {
    report
        .required_documents()
        .filter(|row| !row.is_uploaded)
        .map(|row| {
            FinancialDocument::new(
                row.label_id,
                row.year,
                row.quarter,
                DocumentStatus::ConfirmedAndProcessed.code(),
            )
        })
        .collect()
}

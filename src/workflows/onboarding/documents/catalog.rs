use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::super::wire::integer_from_value;

/// Wire identifier of a document label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LabelId(pub i32);

/// Accepts ids sent as numbers or numeric strings. Anything else is rejected,
/// since a document without a readable label cannot be placed in a slot.
impl<'de> Deserialize<'de> for LabelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        integer_from_value(&value)
            .map(LabelId)
            .ok_or_else(|| D::Error::custom(format!("invalid label id {value}")))
    }
}

impl LabelId {
    pub fn known(self) -> Option<DocumentLabel> {
        DocumentLabel::from_id(self)
    }
}

impl std::fmt::Display for LabelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Labels the console knows by name. Ids are shared with the document API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentLabel {
    AuditReport,
    BalanceSheet,
    IncomeStatement,
    AnnualTaxReturn,
    InterimTaxReturn,
    TrialBalance,
    CreditBureauReport,
    SignatureCircular,
    BankStatement,
}

impl DocumentLabel {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::AuditReport,
            Self::BalanceSheet,
            Self::IncomeStatement,
            Self::AnnualTaxReturn,
            Self::InterimTaxReturn,
            Self::TrialBalance,
            Self::CreditBureauReport,
            Self::SignatureCircular,
            Self::BankStatement,
        ]
    }

    pub const fn id(self) -> LabelId {
        LabelId(match self {
            Self::AuditReport => 29,
            Self::BalanceSheet => 30,
            Self::IncomeStatement => 31,
            Self::AnnualTaxReturn => 32,
            Self::InterimTaxReturn => 33,
            Self::TrialBalance => 34,
            Self::CreditBureauReport => 35,
            Self::SignatureCircular => 36,
            Self::BankStatement => 37,
        })
    }

    pub fn from_id(id: LabelId) -> Option<Self> {
        Self::ordered().into_iter().find(|label| label.id() == id)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AuditReport => "Independent Audit Report",
            Self::BalanceSheet => "Balance Sheet",
            Self::IncomeStatement => "Income Statement",
            Self::AnnualTaxReturn => "Corporate Tax Return",
            Self::InterimTaxReturn => "Interim Tax Return",
            Self::TrialBalance => "Trial Balance",
            Self::CreditBureauReport => "Credit Bureau Report",
            Self::SignatureCircular => "Signature Circular",
            Self::BankStatement => "Bank Statement",
        }
    }
}

/// Review state reported by the document API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    AwaitingControl,
    Approved,
    Declined,
    AwaitingApproval,
    AwaitingProcessing,
    ConfirmedAndProcessed,
    NotConfirmed,
    NotProcessed,
    NotProcessedByExternalProcessor,
}

impl DocumentStatus {
    pub const fn code(self) -> i32 {
        match self {
            Self::AwaitingControl => 0,
            Self::Approved => 1,
            Self::Declined => 3,
            Self::AwaitingApproval => 4,
            Self::AwaitingProcessing => 5,
            Self::ConfirmedAndProcessed => 6,
            Self::NotConfirmed => 7,
            Self::NotProcessed => 8,
            Self::NotProcessedByExternalProcessor => 9,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::AwaitingControl),
            1 => Some(Self::Approved),
            3 => Some(Self::Declined),
            4 => Some(Self::AwaitingApproval),
            5 => Some(Self::AwaitingProcessing),
            6 => Some(Self::ConfirmedAndProcessed),
            7 => Some(Self::NotConfirmed),
            8 => Some(Self::NotProcessed),
            9 => Some(Self::NotProcessedByExternalProcessor),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AwaitingControl => "awaiting control",
            Self::Approved => "approved",
            Self::Declined => "declined",
            Self::AwaitingApproval => "awaiting approval",
            Self::AwaitingProcessing => "awaiting processing",
            Self::ConfirmedAndProcessed => "confirmed and processed",
            Self::NotConfirmed => "not confirmed",
            Self::NotProcessed => "not processed",
            Self::NotProcessedByExternalProcessor => "not processed by external processor",
        }
    }

    pub const fn bucket(self) -> StatusBucket {
        match self {
            Self::AwaitingControl => StatusBucket::Pending,
            Self::Approved | Self::ConfirmedAndProcessed => StatusBucket::Current,
            Self::Declined
            | Self::NotConfirmed
            | Self::NotProcessed
            | Self::NotProcessedByExternalProcessor => StatusBucket::Rejected,
            Self::AwaitingApproval | Self::AwaitingProcessing => StatusBucket::Processing,
        }
    }
}

/// Display grouping of document status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Pending,
    Current,
    Rejected,
    Processing,
}

impl StatusBucket {
    /// Unknown codes display as pending.
    pub const fn from_code(code: i32) -> Self {
        match DocumentStatus::from_code(code) {
            Some(status) => status.bucket(),
            None => Self::Pending,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Current => "current",
            Self::Rejected => "rejected",
            Self::Processing => "processing",
        }
    }
}

/// Approved (1) or confirmed-and-processed (6).
pub const fn is_approved(code: i32) -> bool {
    matches!(StatusBucket::from_code(code), StatusBucket::Current)
}

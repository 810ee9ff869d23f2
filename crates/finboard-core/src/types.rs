//! Enumerations describing a transaction

use serde::{Deserialize, Serialize};

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received
    Incoming,
    /// Money spent
    Outgoing,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Incoming, TransactionType::Outgoing];
}

impl std::str::FromStr for TransactionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "incoming" => Ok(TransactionType::Incoming),
            "outgoing" => Ok(TransactionType::Outgoing),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Incoming => write!(f, "incoming"),
            TransactionType::Outgoing => write!(f, "outgoing"),
        }
    }
}

/// Settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(TransactionStatus::Completed),
            "pending" => Ok(TransactionStatus::Pending),
            "failed" => Ok(TransactionStatus::Failed),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Shopping,
    Food,
    Transport,
    Entertainment,
    Utilities,
    Income,
}

impl TransactionCategory {
    pub const ALL: [TransactionCategory; 6] = [
        TransactionCategory::Shopping,
        TransactionCategory::Food,
        TransactionCategory::Transport,
        TransactionCategory::Entertainment,
        TransactionCategory::Utilities,
        TransactionCategory::Income,
    ];
}

impl std::str::FromStr for TransactionCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shopping" => Ok(TransactionCategory::Shopping),
            "food" => Ok(TransactionCategory::Food),
            "transport" => Ok(TransactionCategory::Transport),
            "entertainment" => Ok(TransactionCategory::Entertainment),
            "utilities" => Ok(TransactionCategory::Utilities),
            "income" => Ok(TransactionCategory::Income),
            _ => Err(format!("Invalid transaction category: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionCategory::Shopping => write!(f, "shopping"),
            TransactionCategory::Food => write!(f, "food"),
            TransactionCategory::Transport => write!(f, "transport"),
            TransactionCategory::Entertainment => write!(f, "entertainment"),
            TransactionCategory::Utilities => write!(f, "utilities"),
            TransactionCategory::Income => write!(f, "income"),
        }
    }
}

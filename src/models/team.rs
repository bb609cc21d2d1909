// src/models/team.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub roster_size: i32,
    pub status: TeamStatus,
    pub payment: PaymentStatus,
}

/// Where a team stands in the registration workflow. The workflow itself
/// (approving, rejecting, collecting payment) lives outside this crate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl TeamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TeamStatus::Pending => "Pendente",
            TeamStatus::Confirmed => "Confirmado",
            TeamStatus::Rejected => "Rejeitado",
        }
    }
}

impl From<String> for TeamStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "confirmed" => TeamStatus::Confirmed,
            "rejected" => TeamStatus::Rejected,
            _ => TeamStatus::Pending,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendente",
            PaymentStatus::Paid => "Pago",
        }
    }
}

/// Request to register a new team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamRegistrationRequest {
    pub name: String,
    pub short_name: Option<String>,
    pub roster_size: Option<i32>,
}

impl TeamRegistrationRequest {
    /// Validate team registration request
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if name.len() < 2 {
            return Err("Team name must be at least 2 characters".to_string());
        }

        if name.len() > 50 {
            return Err("Team name cannot exceed 50 characters".to_string());
        }

        if !name.chars().any(|c| c.is_alphanumeric()) {
            return Err("Team name must contain at least one letter or number".to_string());
        }

        if let Some(short) = &self.short_name {
            let short = short.trim();
            if short.is_empty() || short.len() > 5 {
                return Err("Short name must be between 1 and 5 characters".to_string());
            }
        }

        if let Some(size) = self.roster_size {
            if !(7..=40).contains(&size) {
                return Err("Roster size must be between 7 and 40 players".to_string());
            }
        }

        Ok(())
    }
}

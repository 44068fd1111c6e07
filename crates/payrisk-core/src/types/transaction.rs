//! Transaction inputs

use super::identifier::validate_identifier;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// First hour (inclusive) of the night-time window
pub const NIGHT_START_HOUR: u8 = 22;

/// Last hour (inclusive) of the night-time window
pub const NIGHT_END_HOUR: u8 = 6;

/// Whether a local hour of day falls in the night-time window (22:00 - 06:59)
pub fn is_night_hour(hour: u8) -> bool {
    hour >= NIGHT_START_HOUR || hour <= NIGHT_END_HOUR
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidAmount(amount))
    }
}

fn validate_hour(hour: u8) -> Result<()> {
    if hour <= 23 {
        Ok(())
    } else {
        Err(CoreError::InvalidHour(hour))
    }
}

/// How the caller describes the time of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightIndicator {
    /// Caller already decided whether the transfer happens at night
    Flag(bool),

    /// Local hour of day (0-23); night-time is derived from it
    Hour(u8),
}

impl NightIndicator {
    /// Pick the explicit flag if supplied, else derive from the hour
    pub fn from_parts(flag: Option<bool>, hour: Option<u8>) -> Option<Self> {
        match (flag, hour) {
            (Some(flag), _) => Some(NightIndicator::Flag(flag)),
            (None, Some(hour)) => Some(NightIndicator::Hour(hour)),
            (None, None) => None,
        }
    }

    pub fn is_night(&self) -> bool {
        match self {
            NightIndicator::Flag(flag) => *flag,
            NightIndicator::Hour(hour) => is_night_hour(*hour),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            NightIndicator::Flag(_) => Ok(()),
            NightIndicator::Hour(hour) => validate_hour(*hour),
        }
    }
}

/// Features of a single transfer, as seen by the scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFeatures {
    /// Transfer amount in currency-agnostic units
    pub amount: f64,

    /// Night-time flag or hour of day
    pub night: NightIndicator,

    /// Receiver payment identifier
    pub receiver_id: String,

    /// The sender has never paid this receiver before
    pub is_new_receiver: bool,
}

impl TransactionFeatures {
    pub fn new(
        amount: f64,
        night: NightIndicator,
        receiver_id: impl Into<String>,
        is_new_receiver: bool,
    ) -> Self {
        Self {
            amount,
            night,
            receiver_id: receiver_id.into(),
            is_new_receiver,
        }
    }

    pub fn is_night(&self) -> bool {
        self.night.is_night()
    }

    /// Reject features that no rule may run against
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)?;
        self.night.validate()?;
        validate_identifier(&self.receiver_id)
    }
}

/// A proposed transfer whose history has not been resolved yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub sender_id: String,
    pub receiver_id: String,
    pub amount: f64,

    /// Explicit night-time flag; takes precedence over `hour`
    #[serde(default)]
    pub is_night: Option<bool>,

    /// Local hour of day the transfer is made at
    #[serde(default)]
    pub hour: Option<u8>,
}

impl TransferRequest {
    pub fn new(sender_id: impl Into<String>, receiver_id: impl Into<String>, amount: f64) -> Self {
        Self {
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            amount,
            is_night: None,
            hour: None,
        }
    }

    pub fn with_night_flag(mut self, is_night: bool) -> Self {
        self.is_night = Some(is_night);
        self
    }

    pub fn with_hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Night indicator supplied by the caller, if any
    pub fn night_indicator(&self) -> Option<NightIndicator> {
        NightIndicator::from_parts(self.is_night, self.hour)
    }

    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)?;
        if let Some(hour) = self.hour {
            validate_hour(hour)?;
        }
        validate_identifier(&self.sender_id)?;
        validate_identifier(&self.receiver_id)?;
        if self.sender_id == self.receiver_id {
            return Err(CoreError::SelfTransfer);
        }
        Ok(())
    }

    /// Build scoring features once the receiver history is known
    pub fn to_features(&self, night: NightIndicator, is_new_receiver: bool) -> TransactionFeatures {
        TransactionFeatures::new(self.amount, night, self.receiver_id.clone(), is_new_receiver)
    }
}

//! Patient intake form.
//!
//! Fields left off the command line are collected interactively. Submission
//! stays blocked until age, weight, and a non-empty symptom description are
//! all present; an attached image never blocks submission.

use std::path::PathBuf;

use dialoguer::Input;
use helprx_common::{AnalysisRequest, InlineImage};

use crate::error::{HelpRxError, Result};

pub const MAX_AGE: u32 = 120;
pub const MAX_WEIGHT: f64 = 999.0;

#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub symptoms: Option<String>,
    pub image: Option<PathBuf>,
}

impl PatientForm {
    /// Check all required fields. Returns the first problem found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        match self.age {
            None => return Err("age is required".into()),
            Some(age) if age > MAX_AGE => {
                return Err(format!("age must be between 0 and {MAX_AGE}"))
            }
            Some(_) => {}
        }

        match self.weight {
            None => return Err("weight is required".into()),
            Some(w) if !(0.0..=MAX_WEIGHT).contains(&w) => {
                return Err(format!("weight must be between 0 and {MAX_WEIGHT} lbs"))
            }
            Some(_) => {}
        }

        match &self.symptoms {
            None => Err("symptoms are required".into()),
            Some(s) if s.trim().is_empty() => Err("symptoms must not be empty".into()),
            Some(_) => Ok(()),
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Prompt for every field still missing.
    pub fn complete_interactively(&mut self) -> Result<()> {
        if self.age.is_none() {
            let age: u32 = Input::new()
                .with_prompt("Age (years)")
                .validate_with(|v: &u32| {
                    if *v <= MAX_AGE {
                        Ok(())
                    } else {
                        Err(format!("age must be between 0 and {MAX_AGE}"))
                    }
                })
                .interact_text()
                .map_err(|e| HelpRxError::Config(e.to_string()))?;
            self.age = Some(age);
        }

        if self.weight.is_none() {
            let weight: f64 = Input::new()
                .with_prompt("Weight (lbs)")
                .validate_with(|v: &f64| {
                    if (0.0..=MAX_WEIGHT).contains(v) {
                        Ok(())
                    } else {
                        Err(format!("weight must be between 0 and {MAX_WEIGHT} lbs"))
                    }
                })
                .interact_text()
                .map_err(|e| HelpRxError::Config(e.to_string()))?;
            self.weight = Some(weight);
        }

        if self.symptoms.as_deref().map_or(true, |s| s.trim().is_empty()) {
            let symptoms: String = Input::new()
                .with_prompt("Describe your symptoms")
                .validate_with(|v: &String| {
                    if v.trim().is_empty() {
                        Err("symptoms must not be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()
                .map_err(|e| HelpRxError::Config(e.to_string()))?;
            self.symptoms = Some(symptoms);
        }

        Ok(())
    }

    /// Build the submission from a validated form.
    pub fn to_request(&self, image: Option<InlineImage>) -> Result<AnalysisRequest> {
        self.validate().map_err(HelpRxError::Config)?;

        Ok(AnalysisRequest {
            age: self.age.unwrap_or_default(),
            weight: self.weight.unwrap_or_default(),
            symptoms: self.symptoms.clone().unwrap_or_default().trim().to_string(),
            image,
        })
    }
}

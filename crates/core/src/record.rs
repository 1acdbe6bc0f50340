//! Birth-certificate record contract
//!
//! The persisted document shape ([`BirthRecord`]) and the two caller input
//! shapes ([`RecordDraft`] for create, [`RecordUpdate`] for update). The
//! update shape omits `userName` on purpose: ownership is fixed at creation
//! and every later version carries it forward. That omission is the one
//! asymmetry between the create and update field sets, and the types
//! enforce it.
//!
//! Validation is presence-only. Every caller-supplied field must be a
//! non-empty string; nothing is trimmed and no format is checked (`dob` is
//! conventionally `YYYY-MM-DD` but only its presence is enforced).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Document-type discriminator stored in every record.
///
/// The ledger holds documents of many types side by side; this tag is what
/// scopes queries to birth certificates.
pub const DOC_TYPE: &str = "birthCert";

/// A birth-certificate document as persisted in the ledger.
///
/// Thirteen caller-supplied fields plus the fixed [`DOC_TYPE`]
/// discriminator. The wire format is JSON with camelCase names; field
/// order on the wire never affects round-trip equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    /// Primary key in the ledger.
    pub id: String,
    /// Owning user. Fixed at creation; updates carry it forward.
    pub user_name: String,
    /// Subject's name.
    pub name: String,
    /// Father's name.
    pub father_name: String,
    /// Mother's name.
    pub mother_name: String,
    /// Date of birth, conventionally `YYYY-MM-DD`.
    pub dob: String,
    /// Subject's gender.
    pub gender: String,
    /// Birth weight.
    pub weight: String,
    /// Country of birth.
    pub country: String,
    /// State or province of birth.
    pub state: String,
    /// City of birth.
    pub city: String,
    /// Hospital where the birth was recorded.
    pub hospital_name: String,
    /// Registered permanent address.
    pub permanent_address: String,
    /// Always [`DOC_TYPE`]; re-asserted on every write.
    pub doc_type: String,
}

/// Caller input for record creation: all thirteen record fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    /// Primary key for the new record.
    pub id: String,
    /// Owning user.
    pub user_name: String,
    /// Subject's name.
    pub name: String,
    /// Father's name.
    pub father_name: String,
    /// Mother's name.
    pub mother_name: String,
    /// Date of birth, conventionally `YYYY-MM-DD`.
    pub dob: String,
    /// Subject's gender.
    pub gender: String,
    /// Birth weight.
    pub weight: String,
    /// Country of birth.
    pub country: String,
    /// State or province of birth.
    pub state: String,
    /// City of birth.
    pub city: String,
    /// Hospital where the birth was recorded.
    pub hospital_name: String,
    /// Registered permanent address.
    pub permanent_address: String,
}

/// Caller input for updates: every record field except `userName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    /// Key of the record to update.
    pub id: String,
    /// Subject's name.
    pub name: String,
    /// Father's name.
    pub father_name: String,
    /// Mother's name.
    pub mother_name: String,
    /// Date of birth, conventionally `YYYY-MM-DD`.
    pub dob: String,
    /// Subject's gender.
    pub gender: String,
    /// Birth weight.
    pub weight: String,
    /// Country of birth.
    pub country: String,
    /// State or province of birth.
    pub state: String,
    /// City of birth.
    pub city: String,
    /// Hospital where the birth was recorded.
    pub hospital_name: String,
    /// Registered permanent address.
    pub permanent_address: String,
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}

impl RecordDraft {
    /// Check that every field is non-empty.
    ///
    /// Fields are checked in declaration order and the error names the
    /// first empty one by its wire name.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] for the first empty field.
    pub fn validate(&self) -> Result<()> {
        require("id", &self.id)?;
        require("userName", &self.user_name)?;
        require("name", &self.name)?;
        require("fatherName", &self.father_name)?;
        require("motherName", &self.mother_name)?;
        require("dob", &self.dob)?;
        require("gender", &self.gender)?;
        require("weight", &self.weight)?;
        require("country", &self.country)?;
        require("state", &self.state)?;
        require("city", &self.city)?;
        require("hospitalName", &self.hospital_name)?;
        require("permanentAddress", &self.permanent_address)?;
        Ok(())
    }

    /// Convert the draft into the persisted shape, asserting the
    /// [`DOC_TYPE`] discriminator.
    pub fn into_record(self) -> BirthRecord {
        BirthRecord {
            id: self.id,
            user_name: self.user_name,
            name: self.name,
            father_name: self.father_name,
            mother_name: self.mother_name,
            dob: self.dob,
            gender: self.gender,
            weight: self.weight,
            country: self.country,
            state: self.state,
            city: self.city,
            hospital_name: self.hospital_name,
            permanent_address: self.permanent_address,
            doc_type: DOC_TYPE.to_string(),
        }
    }
}

impl RecordUpdate {
    /// Check that every field is non-empty.
    ///
    /// Same presence-only rule as [`RecordDraft::validate`], over the
    /// twelve update fields.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] for the first empty field.
    pub fn validate(&self) -> Result<()> {
        require("id", &self.id)?;
        require("name", &self.name)?;
        require("fatherName", &self.father_name)?;
        require("motherName", &self.mother_name)?;
        require("dob", &self.dob)?;
        require("gender", &self.gender)?;
        require("weight", &self.weight)?;
        require("country", &self.country)?;
        require("state", &self.state)?;
        require("city", &self.city)?;
        require("hospitalName", &self.hospital_name)?;
        require("permanentAddress", &self.permanent_address)?;
        Ok(())
    }

    /// Overlay this update onto the prior version of the record.
    ///
    /// Every update field replaces its counterpart; `userName` is carried
    /// forward from `prior` and the [`DOC_TYPE`] discriminator is
    /// re-asserted. The key (`id`) comes from the update, which is also
    /// the key the prior version was read under.
    pub fn apply_to(self, prior: &BirthRecord) -> BirthRecord {
        BirthRecord {
            id: self.id,
            user_name: prior.user_name.clone(),
            name: self.name,
            father_name: self.father_name,
            mother_name: self.mother_name,
            dob: self.dob,
            gender: self.gender,
            weight: self.weight,
            country: self.country,
            state: self.state,
            city: self.city,
            hospital_name: self.hospital_name,
            permanent_address: self.permanent_address,
            doc_type: DOC_TYPE.to_string(),
        }
    }
}

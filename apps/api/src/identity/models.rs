use serde::{Deserialize, Serialize};

/// Details extracted from an uploaded Aadhaar card image. Field names match
/// the wire schema the extraction prompt pins down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityDetails {
    pub name: String,
    #[serde(rename = "aadharID")]
    pub aadhar_id: String,
    pub dob: String,
    /// City name parsed out of the printed address.
    pub location: String,
}

// All vision prompt constants for document extraction.

/// Aadhaar card extraction prompt — enforces JSON-only output.
///
/// The provider is configured with a JSON response MIME type, but the prompt
/// still pins the exact schema: a single-element array holding name, aadharID,
/// dob, and the city extracted from the address.
pub const AADHAAR_EXTRACT_PROMPT: &str = r#"Parse this Aadhaar card image and extract the holder's details as JSON.

Return a JSON array with exactly one object using this EXACT schema (no extra fields):
[
  {
    "name": "John Doe",
    "aadharID": "1234 5678 9012",
    "dob": "01/01/2000",
    "location": "New York"
  }
]

Rules:
- "location" is the CITY name only — read the printed address and reduce it to its city.
- Keep the aadharID digit grouping exactly as printed.
- If a field cannot be read, use the example's value for that field.
- Do NOT include any text outside the JSON array.
- Do NOT use markdown code fences.
- Do NOT include explanations or apologies."#;

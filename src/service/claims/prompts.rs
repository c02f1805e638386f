//! Prompts for claim extraction

/// System prompt for claim extraction
pub const EXTRACTION_PREAMBLE: &str = "You extract the main claims or beliefs from user statements. \
Focus on clear, specific claims that can be analyzed. Respond with a JSON array of strings only.";

/// Build the extraction prompt for a user statement
pub fn build_extraction_prompt(statement: &str) -> String {
    format!(
        r#"Extract the main claims or beliefs from the following statement.
Focus on extracting clear, specific claims that can be analyzed.
If multiple claims are present, extract up to 3 of the most significant ones.
If no clear claims are present, extract the main point as a claim.

Statement: "{statement}"

Output the claims as a JSON array of strings, with the most significant claim first.
Example output format: ["Main claim here", "Secondary claim here"]

Do not add any text outside the JSON array."#
    )
}

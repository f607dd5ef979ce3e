//! Prompts for legal strategy analysis

/// System prompt for strategy analysis
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a seasoned legal expert specializing in arbitration.

Your role is to analyze a legal strategy and its case information and produce
a structured breakdown of the case.

You must:
- Base conclusions strictly on the provided strategy and case information
- Keep the statement of facts neutral
- Identify both strengths and weaknesses of the position
- Cite real, verifiable case law only

Your output must be structured JSON only and conform to the requested schema."#;

/// Build the analysis prompt from the user's strategy text
pub fn build_analysis_prompt(legal_strategy: &str) -> String {
    format!(
        r#"Analyze the provided legal strategy and case information. Structure your response in the following JSON format:

- type_of_arbitration: The type of arbitration (e.g., Commercial, Investment Treaty).
- damages_claimed: The amount and currency of damages claimed.
- parties: The names of the parties involved.
- seat_of_arbitration: The legal place or seat of the arbitration.
- applicable_laws: The laws applicable to the substance of the dispute.
- statement_of_facts: A neutral summary of the key facts of the case.
- number_of_expert_witnesses: The number of expert witnesses involved.
- contentions: The main contentions or arguments of the case.
- weaknesses: Weaknesses in the provided legal argument or case position.
- strengths: Strengths in the provided legal argument or case position.
- relevant_case_laws: An array of objects. This is very important. For each object, provide a 'case_name' and a 'relevance' property explaining why the case is relevant.
- summary_of_arguments: A concise summary of the overall legal arguments.
- final_cautions: Final cautions or potential risks to be aware of.

Legal Strategy and Case Information:
{legal_strategy}

Ensure your output is a valid JSON object matching the defined schema."#,
        legal_strategy = legal_strategy
    )
}

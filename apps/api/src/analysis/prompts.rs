// Prompt constants for the resume/job match analysis call.

/// System prompt for the analysis call. The response layout it pins down is
/// what `result_parser` expects, but the parser tolerates drift.
pub const ANALYSIS_SYSTEM: &str = "You are a career advisor AI. \
    You analyze a job description and a resume to help a job seeker tailor \
    their resume. You respond in markdown using exactly the section layout \
    you are given, with no extra commentary before or after.";

pub const ANALYSIS_PROMPT_TEMPLATE: &str = "\
Analyze the following job description and resume.

Job Description:
\"\"\"{job_text}\"\"\"

Resume:
\"\"\"{resume_text}\"\"\"

Your tasks:
1. Extract the top 10 job requirements from the job description.
2. Evaluate how well the resume matches these requirements.
3. Give a compatibility score out of 100.
4. Provide a short summary (one paragraph) about the compatibility and the resume.
5. Suggest 5 concrete improvements the candidate can make to the resume to better align with the job.

Respond in the markdown format:

**Score: <number>/100**

**Match Summary:**
...

**Top Requirements:**
- requirement 1
- requirement 2
...

**Suggestions:**
- suggestion 1
- suggestion 2
...
";

/// Fills the analysis prompt template with the two extracted documents.
pub fn build_analysis_prompt(resume_text: &str, job_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_text}", job_text)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_substitutes_both_documents() {
        let prompt = build_analysis_prompt("10 years of Rust", "Senior Rust Engineer");
        assert!(prompt.contains("10 years of Rust"));
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_text}"));
    }

    #[test]
    fn prompt_pins_the_response_layout() {
        let prompt = build_analysis_prompt("r", "j");
        assert!(prompt.contains("**Score: <number>/100**"));
        assert!(prompt.contains("**Match Summary:**"));
        assert!(prompt.contains("**Top Requirements:**"));
        assert!(prompt.contains("**Suggestions:**"));
    }
}

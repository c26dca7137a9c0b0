// SPDX-License-Identifier: MIT

//! Canned fallback payloads
//!
//! When a generation or search call fails, the owning agent substitutes one
//! of these locally computed responses so every request still completes with
//! a non-empty payload. Where the payload varies, the choice is a cheap
//! clock-based pick from a fixed set, no RNG state required.

use chrono::Utc;

/// Pick one entry from a fixed set based on the current clock
fn pick<'a>(options: &[&'a str]) -> &'a str {
    let idx = Utc::now().timestamp_subsec_nanos() as usize % options.len();
    options[idx]
}

const INTERVIEWER_LINES: [&str; 8] = [
    "Tell me about your experience with machine learning frameworks.",
    "How would you approach building a generative AI model from scratch?",
    "What challenges have you faced in previous AI projects?",
    "How do you stay updated with the latest developments in AI?",
    "Can you explain the difference between supervised and unsupervised learning?",
    "What metrics would you use to evaluate a generative model?",
    "How would you handle bias in AI systems?",
    "Tell me about a time when you had to debug a complex AI model.",
];

const COMPANIES: [&str; 6] = [
    "Google",
    "Microsoft",
    "Amazon",
    "Meta",
    "Apple",
    "Startup Inc.",
];

const LOCATIONS: [&str; 5] = ["San Francisco", "New York", "Seattle", "Austin", "Remote"];

/// Generic learning-content fallback (tutorials and Q&A)
pub fn learning_overview(query: &str) -> String {
    format!(
        "# Response to: {query}\n\n\
## Overview\n\
Generative AI refers to artificial intelligence systems that can generate new content, \
including text, images, audio, and more. These systems learn patterns from existing data \
and use that knowledge to create new, original content.\n\n\
## Key Concepts\n\
- **Neural Networks**: The foundation of modern AI systems\n\
- **Transformers**: Architecture behind many language models\n\
- **Training Data**: Critical for model performance and bias mitigation\n\
- **Fine-tuning**: Adapting pre-trained models for specific tasks\n\n\
## Applications\n\
- Content creation\n\
- Code generation\n\
- Virtual assistants\n\
- Creative tools for artists and designers\n\n\
## Challenges\n\
- Ethical considerations\n\
- Bias in training data\n\
- Computational requirements\n\
- Evaluation metrics\n\n\
For more information, consider exploring resources from organizations like OpenAI, \
Google AI, and academic institutions specializing in machine learning research.\n"
    )
}

/// Fallback list of interview questions
pub fn interview_questions(query: &str) -> String {
    format!(
        "# Interview Questions for {query}\n\n\
## Technical Questions\n\
1. **What is your experience with generative AI models?**\n\
   - *Looking for: Understanding of different architectures and hands-on experience*\n\n\
2. **Explain the difference between GPT, BERT, and T5 models.**\n\
   - *Looking for: Technical knowledge of transformer architectures*\n\n\
3. **How would you handle bias in a language model?**\n\
   - *Looking for: Awareness of ethical considerations and practical approaches*\n\n\
## Problem-Solving Questions\n\
1. **How would you design a system to generate realistic images from text descriptions?**\n\
   - *Looking for: System design skills and understanding of multimodal models*\n\n\
2. **What metrics would you use to evaluate a generative model?**\n\
   - *Looking for: Knowledge of evaluation frameworks beyond simple accuracy*\n\n\
## Behavioral Questions\n\
1. **Tell me about a time when you had to explain a complex AI concept to non-technical stakeholders.**\n\
   - *Looking for: Communication skills and ability to translate technical concepts*\n\n\
2. **How do you stay updated with the latest developments in AI?**\n\
   - *Looking for: Continuous learning mindset and professional development*\n"
    )
}

/// One canned interviewer turn for the mock interview
pub fn interviewer_reply() -> String {
    format!(
        "Let's continue with the interview. {}",
        pick(&INTERVIEWER_LINES)
    )
}

/// Fallback job listing page
pub fn job_listings(query: &str) -> String {
    format!(
        "# Job Search Results for: {query}\n\n\
## Top Opportunities\n\n\
### 1. Senior Software Engineer - AI/ML\n\
**Company:** {}  \n\
**Location:** {}  \n\
**Salary Range:** $120,000 - $180,000  \n\
**Description:** Looking for an experienced software engineer with expertise in machine \
learning and AI systems. The ideal candidate will have experience with large language \
models and generative AI applications.\n\n\
### 2. Machine Learning Engineer\n\
**Company:** {}  \n\
**Location:** {}  \n\
**Salary Range:** $110,000 - $160,000  \n\
**Description:** Join our team building next-generation AI products. You'll work on \
training and deploying models that power our core products.\n\n\
### 3. AI Research Scientist\n\
**Company:** {}  \n\
**Location:** {}  \n\
**Salary Range:** $130,000 - $190,000  \n\
**Description:** Research role focused on advancing the state of the art in generative AI. \
PhD in Computer Science, Machine Learning, or related field preferred.\n\n\
## Job Search Tips\n\
- Update your resume to highlight AI/ML skills and projects\n\
- Network with professionals in the field through LinkedIn and industry events\n\
- Consider contributing to open-source AI projects to build your portfolio\n\
- Prepare for technical interviews by practicing machine learning concepts and coding challenges\n\n\
*Note: These job listings are examples based on your search query. For the most current \
opportunities, visit job boards like LinkedIn, Indeed, or company career pages.*\n",
        pick(&COMPANIES),
        pick(&LOCATIONS),
        pick(&COMPANIES),
        pick(&LOCATIONS),
        pick(&COMPANIES),
        pick(&LOCATIONS),
    )
}

/// Fallback resume skeleton
pub fn resume_template(query: &str) -> String {
    format!(
        "# Resume Draft for: {query}\n\n\
## Summary\n\
Results-driven engineer with hands-on experience in machine learning and generative AI. \
Comfortable taking models from prototype to production and communicating trade-offs to \
non-technical stakeholders.\n\n\
## Skills\n\
- Python, SQL, cloud platforms (GCP/AWS)\n\
- LLM application development, prompt engineering, RAG pipelines\n\
- Model evaluation, fine-tuning, data preparation\n\n\
## Experience\n\
**Machine Learning Engineer** - Example Corp (2021 - Present)\n\
- Built and deployed generative AI features used by thousands of customers\n\
- Reduced inference costs by profiling and right-sizing model serving\n\n\
**Software Engineer** - Previous Co (2018 - 2021)\n\
- Delivered backend services and data pipelines supporting ML teams\n\n\
## Projects\n\
- Open-source contribution to an LLM evaluation toolkit\n\
- Personal project: retrieval-augmented assistant for technical documentation\n\n\
## Education\n\
B.S. in Computer Science\n\n\
*Note: This is a generic template. Customize each section with your own details \
and quantified accomplishments.*\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_returns_member() {
        let options = ["a", "b", "c"];
        let choice = pick(&options);
        assert!(options.contains(&choice));
    }

    #[test]
    fn test_learning_overview_embeds_query() {
        let text = learning_overview("what is RAG?");
        assert!(text.starts_with("# Response to: what is RAG?"));
        assert!(text.contains("## Key Concepts"));
    }

    #[test]
    fn test_interviewer_reply_non_empty() {
        let reply = interviewer_reply();
        assert!(reply.starts_with("Let's continue with the interview."));
        assert!(reply.len() > 40);
    }

    #[test]
    fn test_job_listings_well_formed() {
        let text = job_listings("ai jobs in berlin");
        assert!(text.contains("ai jobs in berlin"));
        assert!(text.contains("## Top Opportunities"));
        assert!(text.contains("**Company:**"));
    }

    #[test]
    fn test_resume_template_has_sections() {
        let text = resume_template("resume for ML engineer");
        for section in ["## Summary", "## Skills", "## Experience", "## Education"] {
            assert!(text.contains(section), "missing {section}");
        }
    }
}

// SPDX-License-Identifier: MIT

//! Prompt templates for the classifiers and task agents
//!
//! The classifier templates carry a few worked examples; routing downstream
//! only checks for the presence of the expected marker, so no output format
//! is enforced here.

/// Top-level 4-way categorization prompt
pub fn categorize(query: &str) -> String {
    format!(
        "Categorize the following customer query into one of these categories:\n\
         1: Learn Generative AI Technology\n\
         2: Resume Making\n\
         3: Interview Preparation\n\
         4: Job Search\n\
         Give the number only as an output.\n\n\
         Examples:\n\
         1. Query: 'What are the basics of generative AI, and how can I start learning it?' -> 1\n\
         2. Query: 'Can you help me improve my resume for a tech position?' -> 2\n\
         3. Query: 'What are some common questions asked in AI interviews?' -> 3\n\
         4. Query: 'Are there any job openings for AI engineers?' -> 4\n\n\
         Now, categorize the following customer query:\n\
         Query: {query}"
    )
}

/// Learning branch disambiguation: Tutorial vs Question
pub fn classify_learning(query: &str) -> String {
    format!(
        "Categorize the following user query into one of these categories:\n\n\
         Categories:\n\
         - Tutorial: For queries related to creating tutorials, blogs, or documentation on generative AI.\n\
         - Question: For general queries asking about generative AI topics.\n\
         - Default to Question if the query doesn't fit either of these categories.\n\n\
         Examples:\n\
         1. User query: 'How to create a blog on prompt engineering for generative AI?' -> Category: Tutorial\n\
         2. User query: 'Can you provide a step-by-step guide on fine-tuning a generative model?' -> Category: Tutorial\n\
         3. User query: 'Provide me the documentation for Langchain?' -> Category: Tutorial\n\
         4. User query: 'What are the main applications of generative AI?' -> Category: Question\n\
         5. User query: 'Is there any generative AI course available?' -> Category: Question\n\n\
         Now, categorize the following user query:\n\
         The user query is: {query}\n"
    )
}

/// Interview branch disambiguation: Mock vs Question
pub fn classify_interview(query: &str) -> String {
    format!(
        "Categorize the following user query into one of these categories:\n\n\
         Categories:\n\
         - Mock: For requests related to mock interviews.\n\
         - Question: For general queries asking about interview topics or preparation.\n\
         - Default to Question if the query doesn't fit either of these categories.\n\n\
         Examples:\n\
         1. User query: 'Can you conduct a mock interview with me for a Gen AI role?' -> Category: Mock\n\
         2. User query: 'What topics should I prepare for an AI Engineer interview?' -> Category: Question\n\
         3. User query: 'I need to practice interview focused on Gen AI.' -> Category: Mock\n\
         4. User query: 'Can you list important coding topics for AI tech interviews?' -> Category: Question\n\n\
         Now, categorize the following user query:\n\
         The user query is: {query}\n"
    )
}

pub fn tutorial(query: &str, search_results: &str) -> String {
    format!(
        "You are an expert in generative AI and technical writing. \
         I need you to create a comprehensive tutorial based on the following request:\n\n\
         {query}\n\n\
         Here's some information I found from a web search that might be helpful:\n\
         {search_results}\n\n\
         Please provide a well-structured tutorial with explanations, examples, and code snippets where appropriate. \
         Format your response in markdown with clear headings, subheadings, and sections."
    )
}

pub fn answer_query(query: &str, search_results: &str) -> String {
    format!(
        "You are an expert in generative AI and related technologies. \
         I have a question about generative AI that I need you to answer:\n\n\
         {query}\n\n\
         Here's some information I found from a web search that might be helpful:\n\
         {search_results}\n\n\
         Please provide a comprehensive and educational answer. \
         Include examples and explanations where appropriate. Format your response in markdown."
    )
}

pub fn interview_questions(query: &str, search_results: &str) -> String {
    format!(
        "You are an expert interviewer for tech and AI positions. \
         I need you to generate a comprehensive list of interview questions \
         based on the following request:\n\n\
         {query}\n\n\
         Here's some information I found from a web search that might be helpful:\n\
         {search_results}\n\n\
         Please provide a well-structured set of interview questions with brief explanations \
         of what the interviewer is looking for in the answers. Format your response in markdown."
    )
}

/// First turn of a mock interview (no history yet)
pub fn mock_interview_open(query: &str) -> String {
    format!(
        "You are an expert interviewer for tech and AI positions. \
         I need you to start a mock interview based on the following request:\n\n\
         {query}\n\n\
         Please respond as the interviewer with your first question. \
         Keep your response concise and focused on starting the interview."
    )
}

/// Follow-up turn of a mock interview
pub fn mock_interview_continue(query: &str, formatted_history: &str) -> String {
    format!(
        "You are conducting a mock interview for a tech or AI position. \
         Here's the conversation so far:\n\n\
         {formatted_history}\n\n\
         The candidate just said: {query}\n\n\
         Please respond as the interviewer. You can ask follow-up questions, \
         provide feedback, or move on to a new topic. Keep your response concise and realistic."
    )
}

pub fn resume(query: &str, search_results: &str) -> String {
    format!(
        "You are an expert resume writer for tech roles in AI and Generative AI. \
         I need you to draft a customized resume based on the following request:\n\n\
         {query}\n\n\
         Here's some information I found from a web search about current expectations for such roles:\n\
         {search_results}\n\n\
         Please produce a complete, well-structured resume with sections for summary, skills, \
         experience, projects, and education. Format your response in markdown."
    )
}

pub fn job_search(query: &str, search_results: &str) -> String {
    format!(
        "You are a helpful job search assistant. I'll provide you with a job search query, \
         and you'll help me find relevant job listings.\n\n\
         Here's some information I found from a web search that might be helpful:\n\
         {search_results}\n\n\
         Based on this information, please provide a detailed list of job opportunities \
         that match my search criteria. Include job titles, companies, locations, \
         and brief descriptions when available. Format your response in markdown.\n\n\
         My job search query is: {query}"
    )
}

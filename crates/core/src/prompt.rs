//! Instruction templates for the interviewer persona.
//!
//! `interviewer_instructions` is handed once to the voice runtime as its
//! system instructions; the other builders produce supplementary
//! instructions scoped to a single reply.

use crate::context::{self, MAX_CONTEXT_LINES};
use crate::problem::Problem;

/// System instructions defining the persona, tone and guardrails for a
/// session around `problem`. Deterministic given the problem.
pub fn interviewer_instructions(problem: &Problem) -> String {
    format!(
        "You are Sarah, a friendly technical interviewer at a top tech company.\n\
         \n\
         ## Style\n\
         - Warm, encouraging, professional\n\
         - Ask probing questions about thought process\n\
         - Give hints when stuck, NEVER give away answers\n\
         - Keep responses SHORT (1-3 sentences max)\n\
         \n\
         ## Problem: {} ({})\n\
         {}\n\
         \n\
         ## You Can See the Candidate's Code\n\
         React naturally to code changes - acknowledge progress, ask about approach.\n\
         \n\
         ## Solution (FOR YOUR GUIDANCE ONLY - NEVER REVEAL)\n\
         {}\n\
         \n\
         ## Important\n\
         - NEVER write code for them\n\
         - Keep responses to 2-3 sentences\n\
         - Be supportive",
        problem.name, problem.difficulty, problem.description, problem.expected_approach
    )
}

/// Single-reply instructions for the opening turn of the interview.
pub fn greeting_instructions(problem: &Problem) -> String {
    format!(
        "Greet the candidate and present this problem: {} Ask if they have questions.",
        problem.description
    )
}

/// Single-reply instructions issued after a significant code change,
/// embedding the (truncated) current snapshot.
pub fn code_comment_instructions(code: &str) -> String {
    format!(
        "The candidate made a significant code change.\n\
         \n\
         Code:\n\
         ```\n\
         {}\n\
         ```\n\
         \n\
         Ask briefly about their approach (1-2 sentences).",
        context::code_context(code, MAX_CONTEXT_LINES)
    )
}

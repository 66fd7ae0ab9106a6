//! Prompt command implementation.

use crate::cli::PromptArgs;
use crate::error::{CliError, Result};
use morskamary_mapper::{ClassificationPrompt, CompetenceMapper};

/// Execute the prompt command.
pub fn execute_prompt(args: PromptArgs, mapper: &CompetenceMapper) -> Result<()> {
    println!("{}", build(args, mapper)?);
    Ok(())
}

fn build(args: PromptArgs, mapper: &CompetenceMapper) -> Result<String> {
    if args.skill.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "Skill description must not be empty".to_string(),
        ));
    }

    let mut prompt = ClassificationPrompt::new(args.skill);
    if let Some(source) = args.source {
        prompt = prompt.with_source(source);
    }
    if !args.no_examples {
        prompt = prompt.with_examples_from(mapper);
    }
    Ok(prompt.build())
}

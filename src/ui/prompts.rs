use anyhow::Result;
use dialoguer::{Input, Select};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

/// Simple text input prompt with optional default value
///
/// # Arguments
/// * `prompt` - The prompt message to display
/// * `default` - Optional default value
///
/// # Returns
/// * `Ok(String)` - User input or default value
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_prompt = Input::<String>::new()
        .with_prompt(prompt);

    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }

    Ok(input_prompt.interact()?)
}

pub fn prompt_store_identifier() -> Result<String> {
    text_input("Enter store number or name", None)
}

pub fn prompt_filter_input() -> Result<String> {
    text_input(
        "Enter store numbers (comma-separated) or type a flag like 'scrubs', 'kids', 'swim'",
        None,
    )
}

/// Offer suggested store names; `None` when the user escapes out
pub fn prompt_suggestion(names: &[String]) -> Result<Option<usize>> {
    let selection = Select::new()
        .with_prompt("Did you mean one of these?")
        .items(names)
        .default(0)
        .interact_opt()?;

    Ok(selection)
}

pub fn prompt_download(file_name: &str) -> Result<bool> {
    prompt_confirmation(&format!("Download filtered list as '{}'?", file_name), true)
}

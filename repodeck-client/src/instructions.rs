//! Shell instructions shown after create and update
//!
//! Pure formatting over already validated data; nothing here touches the
//! network.

/// Name of the git remote the instructions set up
pub const REMOTE_NAME: &str = "github";

const SEPARATOR_WIDTH: usize = 50;

/// Commands that publish the current directory to a freshly created repository
pub fn bootstrap_commands(clone_url: &str) -> Vec<String> {
    vec![
        "git init".to_string(),
        "git add .".to_string(),
        "git commit -m \"first commit\"".to_string(),
        format!("git remote add {} {}", REMOTE_NAME, clone_url),
        format!("git push -u {} main", REMOTE_NAME),
    ]
}

/// Full message printed after a repository has been created
pub fn bootstrap_instructions(repo_name: &str, html_url: &str, clone_url: &str) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut text = format!(
        "OK. GitHub repository '{}' created.\nHTML URL: {}\n{}\n\n",
        repo_name, html_url, separator
    );
    for command in bootstrap_commands(clone_url) {
        text.push_str(&command);
        text.push('\n');
    }
    text.push('\n');
    text.push_str(&separator);
    text.push('\n');
    text
}

/// Reminder printed after a repository has been renamed or changed
pub fn remote_update_instructions(clone_url: &str) -> String {
    format!(
        "Repository updated.\n\
         Don't forget to update the URL of your local repository if necessary:\n\n\
         git remote set-url {} {}",
        REMOTE_NAME, clone_url
    )
}

/// Prompt for writing a pull request body from a list of commit summaries.
///
/// Placeholders: `{commits}` (one `git log --oneline` line per commit).
pub const PR_BODY_PROMPT: &str = r####"Write the description for a pull request made up of these git commits.

Commits:
{commits}

What to write:
- Open with a short summary of what changed and why.
- Follow with the key changes as bullet points.
- Mention implementation details only when a reviewer needs them.
- Scale the length to the commits: one small fix gets two or three sentences, many unrelated changes get a fuller list. Never pad.

Style:
- Use simple, direct language. Write like you are explaining the change to a teammate.
- Be specific about what changed. No generic praise.
- Do not number sections or headers.
- Do not talk about the commits, this prompt, or yourself. Output only the description.
- Avoid filler words: "furthermore", "notably", "arguably", "interestingly", "additionally".
- Avoid buzzwords: "leverage", "streamline", "robust", "innovative", "cutting-edge", "seamless", "empower".
- Avoid hedging: "potentially", "could be said that", "in some cases".
- Avoid vague verbs: "enhance", "optimize", "transform", "revolutionize".
"####;

/// Fill [`PR_BODY_PROMPT`] with the commit summaries, one per line.
pub fn build_pr_body_prompt(commits: &[String]) -> String {
    PR_BODY_PROMPT.replace("{commits}", &commits.join("\n"))
}

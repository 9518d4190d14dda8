//! Document templates for new skills. Placeholders: `{{skill_name}}` and `{{title}}`.

static SKILL_MD: &str = include_str!("../../templates/skill/SKILL.md");
static USAGE_MD: &str = include_str!("../../templates/skill/examples/usage.md");
static ARCHITECTURE_CHECKLIST_MD: &str =
    include_str!("../../templates/resources/architecture-checklist.md");

fn render(template: &str, skill_name: &str, title: &str) -> String {
    template
        .replace("{{skill_name}}", skill_name)
        .replace("{{title}}", title)
}

/// SKILL.md stub: frontmatter with placeholder description and default tool list, then body sections.
pub fn render_skill_md(skill_name: &str, title: &str) -> String {
    render(SKILL_MD, skill_name, title)
}

/// examples/usage.md with two placeholder worked examples.
pub fn render_usage_md(title: &str) -> String {
    render(USAGE_MD, "", title)
}

/// Architecture checklist with fixed headings and unchecked items.
pub fn render_architecture_checklist(title: &str) -> String {
    render(ARCHITECTURE_CHECKLIST_MD, "", title)
}

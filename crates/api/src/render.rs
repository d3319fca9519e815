//! HTML rendering for the landing page.
//!
//! [`index_page`] is a pure function from the profile and the current
//! calendar year to the full page markup. All profile values pass through
//! [`escape`] on the way in; the profile is trusted source data today, but
//! the renderer does not rely on that.

use std::fmt::Write;

use portfolio_core::{PortfolioProfile, Project, Skill};

/// Escape a string for inclusion in HTML text or attribute content.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full landing page.
pub fn index_page(profile: &PortfolioProfile, year: i32) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name} — Portfolio</title>
<link rel="stylesheet" href="/static/styles.css">
</head>
<body>
<section class="hero reveal">
  <h1 class="typing">{name}</h1>
  <p class="subtitle">{title}</p>
  <p class="about">{about}</p>
  <nav class="links">
    <a href="{github}">GitHub</a>
    <a href="{linkedin}">LinkedIn</a>
    <a href="mailto:{email}">Email</a>
  </nav>
</section>
"#,
        name = escape(&profile.name),
        title = escape(&profile.title),
        about = escape(&profile.about),
        github = escape(&profile.github),
        linkedin = escape(&profile.linkedin),
        email = escape(&profile.email),
    );

    html.push_str("<section class=\"skills reveal\">\n<h2>Skills</h2>\n<div class=\"skill-grid\">\n");
    for skill in &profile.skills {
        html.push_str(&skill_card(skill));
    }
    html.push_str("</div>\n</section>\n");

    html.push_str("<section class=\"projects reveal\">\n<h2>Projects</h2>\n<div class=\"project-grid\">\n");
    for project in &profile.projects {
        html.push_str(&project_card(project));
    }
    html.push_str("</div>\n</section>\n");

    let _ = write!(
        html,
        r#"<section class="contact reveal">
  <h2>Contact</h2>
  <form id="contact-form">
    <input name="name" placeholder="Your name">
    <input name="email" type="email" placeholder="Your email">
    <input name="subject" placeholder="Subject (optional)">
    <textarea name="message" placeholder="Your message"></textarea>
    <button type="submit">Send</button>
    <p id="contact-status"></p>
  </form>
</section>
<footer>&copy; {year} {name}</footer>
<script src="/static/script.js"></script>
</body>
</html>
"#,
        year = year,
        name = escape(&profile.name),
    );

    html
}

fn skill_card(skill: &Skill) -> String {
    format!(
        r#"<div class="skill-card">
  <span class="skill-name">{name}</span>
  <span class="skill-category">{category}</span>
  <div class="skill-bar"><div class="skill-level" style="width:{level}%"></div></div>
</div>
"#,
        name = escape(&skill.name),
        category = escape(&skill.category),
        level = skill.level.min(100),
    )
}

fn project_card(project: &Project) -> String {
    let technologies = project
        .technologies
        .iter()
        .map(|t| format!("<li>{}</li>", escape(t)))
        .collect::<String>();

    format!(
        r#"<div class="project-card">
  <h3>{title}</h3>
  <p>{description}</p>
  <ul class="tech-list">{technologies}</ul>
  <a href="{github}">View on GitHub</a>
</div>
"#,
        title = escape(&project.title),
        description = escape(&project.description),
        technologies = technologies,
        github = escape(&project.github),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

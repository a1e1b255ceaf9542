// Host-side tests for static content and the page markup builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod data {
        include!("../src/core/data.rs");
    }
    pub mod form {
        include!("../src/core/form.rs");
    }
}
mod render {
    include!("../src/render.rs");
}

use crate::core::data::*;
use render::*;

#[test]
fn skill_level_labels() {
    assert_eq!(skill_level_label(1), "Beginner");
    assert_eq!(skill_level_label(2), "Basic");
    assert_eq!(skill_level_label(3), "Intermediate");
    assert_eq!(skill_level_label(4), "Advanced");
    assert_eq!(skill_level_label(5), "Expert");
    assert_eq!(skill_level_label(0), "Intermediate");
    assert_eq!(skill_level_label(9), "Intermediate");
}

#[test]
fn static_skills_are_rated_one_to_five() {
    assert!(!SKILL_CATEGORIES.is_empty());
    for cat in SKILL_CATEGORIES {
        assert!(!cat.skills.is_empty(), "empty category {}", cat.key);
        for skill in cat.skills {
            assert!((1..=5).contains(&skill.level), "{} out of range", skill.name);
        }
    }
    assert_eq!(skill_category("devops").unwrap().skills.len(), 2);
    assert!(skill_category("cooking").is_none());
}

#[test]
fn featured_filter_keeps_order() {
    let all = ProjectFilter::All.apply(PROJECTS);
    assert_eq!(all.len(), PROJECTS.len());

    let featured: Vec<&str> = ProjectFilter::Featured
        .apply(PROJECTS)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(featured, vec!["project1", "project3"]);
}

#[test]
fn filter_keys_round_trip() {
    for f in [ProjectFilter::All, ProjectFilter::Featured] {
        assert_eq!(ProjectFilter::from_key(f.key()), Some(f));
    }
    assert_eq!(ProjectFilter::from_key("recent"), None);
    assert_eq!(ProjectFilter::default(), ProjectFilter::All);
}

#[test]
fn social_entries_skip_missing_links() {
    let labels: Vec<&str> = PERSONAL_INFO
        .social
        .entries()
        .into_iter()
        .map(|(label, _)| label)
        .collect();
    assert!(labels.contains(&"GitHub"));
    assert!(!labels.contains(&"Twitter"));
}

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn page_contains_every_section_anchor() {
    let page = page_markup(2026);
    for id in SECTION_IDS {
        assert!(page.contains(&format!("id='{id}'")), "missing section {id}");
        assert!(page.contains(&format!("href='#{id}'")), "missing nav link {id}");
    }
    assert!(page.contains("&copy; 2026 Ashutosh Singh"));
}

#[test]
fn page_exposes_dom_hooks_used_by_wiring() {
    let page = page_markup(2026);
    for id in [
        constants::HEADER_ID,
        constants::NAV_MENU_ID,
        constants::MENU_TOGGLE_ID,
        constants::HAMBURGER_ID,
        constants::HERO_TITLE_TEXT_ID,
        constants::HERO_CURSOR_ID,
        constants::SKILLS_TABS_ID,
        constants::SKILLS_GRID_ID,
        constants::PROJECT_FILTERS_ID,
        constants::PROJECTS_GRID_ID,
        constants::CONTACT_FORM_ID,
        constants::FORM_RESULT_ID,
        constants::SUBMIT_BUTTON_ID,
        constants::BACK_TO_TOP_ID,
    ] {
        assert!(page.contains(&format!("id='{id}'")), "missing hook {id}");
    }
    for key in ["name", "email", "subject", "message"] {
        assert!(page.contains(&format!("name='{key}'")));
        assert!(page.contains(&format!("id='{key}-error'")));
    }
}

#[test]
fn missing_phone_is_omitted() {
    let html = contact_markup(&PERSONAL_INFO);
    assert!(PERSONAL_INFO.phone.is_none());
    assert!(!html.contains("tel:"));

    let with_phone = PersonalInfo {
        phone: Some("+1 555 0100"),
        ..PERSONAL_INFO
    };
    assert!(contact_markup(&with_phone).contains("href='tel:+1 555 0100'"));
    assert!(footer_markup(&with_phone, 2026).contains("Phone:"));
}

#[test]
fn projects_grid_wraps_cards_in_tilt_surfaces() {
    let all = projects_grid_markup(PROJECTS, ProjectFilter::All);
    assert_eq!(all.matches("tilt-card-premium").count(), PROJECTS.len());
    assert_eq!(all.matches("tilt-card-gloss").count(), PROJECTS.len());

    let featured = projects_grid_markup(PROJECTS, ProjectFilter::Featured);
    assert_eq!(featured.matches("tilt-card-premium").count(), 2);
    assert!(!featured.contains("Weather Dashboard"));
}

#[test]
fn skills_markup_marks_first_tab_active() {
    let html = skills_markup(SKILL_CATEGORIES, 0);
    assert!(html.contains("class='skills-tab active' data-category='frontend'"));
    assert!(html.contains("class='skills-tab' data-category='backend'"));
    assert!(html.contains("HTML"));
}

#[test]
fn skill_cards_fill_dots_up_to_level() {
    let grid = skills_grid_markup(skill_category("devops").unwrap());
    // Git (4) + Vite (3)
    assert_eq!(grid.matches("skill-level-dot filled").count(), 7);
    assert_eq!(grid.matches("skill-level-dot").count(), 10);
    assert!(grid.contains("Advanced"));
}

#[test]
fn section_subtitle_is_optional() {
    let with = section_markup("about", "About", Some("Sub"), "<p>x</p>");
    assert!(with.contains("section-subtitle"));
    let without = section_markup("about", "About", None, "<p>x</p>");
    assert!(!without.contains("section-subtitle"));
    assert!(without.contains("<p>x</p>"));
}

#[test]
fn empty_filter_result_shows_notice() {
    let unfeatured = &PROJECTS[1..2];
    assert!(!unfeatured[0].featured);

    let html = projects_grid_markup(unfeatured, ProjectFilter::Featured);
    assert!(html.contains("No projects found matching the selected filter."));
    assert!(!html.contains("tilt-card-premium"));

    let html = projects_grid_markup(unfeatured, ProjectFilter::All);
    assert!(!html.contains("No projects found"));
    assert_eq!(html.matches("tilt-card-premium").count(), 1);
}

#[test]
fn about_lists_greeting_and_personal_info() {
    let html = about_markup(&PERSONAL_INFO);
    assert!(html.contains("Hello there! I'm Ashutosh Singh"));
    assert!(html.contains("<span class='about-info-label'>Name:</span>"));
    assert!(html.contains(&format!("href='mailto:{}'", PERSONAL_INFO.email)));
    assert!(html.contains("<span class='about-info-label'>Location:</span>"));
    assert!(!html.contains("Phone:"));
    assert!(!html.contains("tel:"));

    let with_phone = PersonalInfo {
        phone: Some("+1 555 0100"),
        ..PERSONAL_INFO
    };
    let html = about_markup(&with_phone);
    assert!(html.contains("<span class='about-info-label'>Phone:</span>"));
    assert!(html.contains("href='tel:+1 555 0100'"));
}

#[test]
fn about_greeting_escapes_the_name() {
    let info = PersonalInfo {
        name: "A <b>&</b>",
        ..PERSONAL_INFO
    };
    let html = about_markup(&info);
    assert!(html.contains("Hello there! I'm A &lt;b&gt;&amp;&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}

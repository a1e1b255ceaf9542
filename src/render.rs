use crate::constants::*;
use crate::core::constants::SKILL_LEVEL_MAX;
use crate::core::data::{
    skill_level_label, PersonalInfo, Project, ProjectFilter, SkillCategory, PERSONAL_INFO,
    PROJECTS, SKILL_CATEGORIES,
};
use crate::core::form::Field;
use std::fmt::Write;

// Markup builders for every section. All interpolated text goes through
// `escape_html`; ids and classes come from `constants.rs`.

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Whole page: header, the five sections and the footer.
pub fn page_markup(current_year: i32) -> String {
    let info = &PERSONAL_INFO;
    format!(
        "<div class='app'>{}<main class='main-content'>{}{}{}{}{}</main>{}</div>",
        header_markup(),
        hero_markup(info),
        about_markup(info),
        skills_markup(SKILL_CATEGORIES, 0),
        projects_markup(PROJECTS, ProjectFilter::All),
        contact_markup(info),
        footer_markup(info, current_year),
    )
}

fn nav_list(class: &str) -> String {
    let mut out = format!("<ul class='{class}'>");
    for (id, label) in NAV_LINKS {
        _ = write!(out, "<li><a href='#{id}'>{label}</a></li>");
    }
    out.push_str("</ul>");
    out
}

pub fn header_markup() -> String {
    format!(
        "<header id='{HEADER_ID}' class='header'><div class='header-container'>\
         <div class='logo'><a href='#home'><span class='logo-text'>Portfolio</span></a></div>\
         <nav id='{NAV_MENU_ID}' class='nav-menu'>{}</nav>\
         <div id='{MENU_TOGGLE_ID}' class='menu-toggle'>\
         <div id='{HAMBURGER_ID}' class='hamburger'><span></span><span></span><span></span></div>\
         </div></div></header>",
        nav_list("nav-links")
    )
}

pub fn hero_markup(info: &PersonalInfo) -> String {
    format!(
        "<section id='home' class='hero'>\
         <div class='hero-background'><div class='hero-overlay'></div></div>\
         <div class='hero-content'><div class='hero-text-container'>\
         <p class='hero-greeting'>Hello, I'm</p>\
         <h1 class='hero-name'>{}</h1>\
         <div class='hero-title-container'><h2 class='hero-title'>\
         <span id='{HERO_TITLE_TEXT_ID}' class='hero-title-text'></span>\
         <span id='{HERO_CURSOR_ID}' class='hero-cursor'>|</span>\
         </h2></div>\
         <p class='hero-bio'>{}</p>\
         <div class='hero-buttons'>{}{}</div>\
         <div class='scroll-indicator'><a href='#about' aria-label='Scroll to About section'>\
         <div class='mouse'><div class='wheel'></div></div>\
         <div class='arrow'><span></span><span></span><span></span></div></a></div>\
         </div></div></section>",
        escape_html(info.name),
        escape_html(info.bio),
        link_button("#projects", "View My Work", "primary", "large"),
        link_button("#contact", "Contact Me", "outline", "large"),
    )
}

fn link_button(href: &str, label: &str, kind: &str, size: &str) -> String {
    format!(
        "<a href='{}' class='button button-{kind} button-{size}'>{}</a>",
        escape_html(href),
        escape_html(label)
    )
}

/// Shared section chrome: title, optional subtitle, divider and body.
pub fn section_markup(id: &str, title: &str, subtitle: Option<&str>, body: &str) -> String {
    let subtitle = subtitle
        .map(|s| format!("<p class='section-subtitle'>{}</p>", escape_html(s)))
        .unwrap_or_default();
    format!(
        "<section id='{id}' class='section'><div class='section-container'>\
         <div class='section-header'><h2 class='section-title'>{}</h2>{subtitle}\
         <div class='section-divider'></div></div>\
         <div class='section-content'>{body}</div></div></section>",
        escape_html(title)
    )
}

pub fn about_markup(info: &PersonalInfo) -> String {
    let mut body = String::from("<div class='about-container'>");
    _ = write!(
        body,
        "<div class='about-image-container'><div class='about-image-wrapper'>\
         <img src='/images/profile.jpg' alt='{}' class='about-image'/></div></div>",
        escape_html(info.name)
    );
    let name = escape_html(info.name);
    _ = write!(
        body,
        "<div class='about-content'><h3 class='about-greeting'>Hello there! I'm {name}</h3>\
         <div class='about-bio'>"
    );
    for para in info.long_bio {
        _ = write!(body, "<p>{}</p>", escape_html(para));
    }
    body.push_str("</div>");
    body.push_str(&about_info_markup(info));
    body.push_str("<div class='about-interests'><h3>Interests</h3><ul class='interests-list'>");
    for interest in info.interests {
        _ = write!(body, "<li class='interest-item'>{}</li>", escape_html(interest));
    }
    body.push_str("</ul></div>");
    _ = write!(
        body,
        "<div class='about-actions'>{}{}</div></div></div>",
        link_button(info.resume_link, "Download Resume", "primary", "medium"),
        link_button("#contact", "Get In Touch", "outline", "medium"),
    );
    section_markup(
        "about",
        "About Me",
        Some("Get to know more about me and my background"),
        &body,
    )
}

fn about_info_markup(info: &PersonalInfo) -> String {
    let item = |label: &str, value: String| {
        format!(
            "<div class='about-info-item'><span class='about-info-label'>{label}:</span>\
             <span class='about-info-value'>{value}</span></div>"
        )
    };
    let email = escape_html(info.email);
    let mut out = String::from("<div class='about-info'>");
    out.push_str(&item("Name", escape_html(info.name)));
    out.push_str(&item("Email", format!("<a href='mailto:{email}'>{email}</a>")));
    if let Some(phone) = info.phone {
        let phone = escape_html(phone);
        out.push_str(&item("Phone", format!("<a href='tel:{phone}'>{phone}</a>")));
    }
    out.push_str(&item("Location", escape_html(info.location)));
    out.push_str("</div>");
    out
}

pub fn skills_markup(categories: &[SkillCategory], active: usize) -> String {
    let mut tabs = format!("<div id='{SKILLS_TABS_ID}' class='skills-tabs'>");
    for (i, cat) in categories.iter().enumerate() {
        let class = if i == active { " active" } else { "" };
        _ = write!(
            tabs,
            "<button class='skills-tab{class}' {DATA_CATEGORY}='{}'>{}</button>",
            escape_html(cat.key),
            escape_html(cat.label)
        );
    }
    tabs.push_str("</div>");
    let grid = categories
        .get(active)
        .map(skills_grid_markup)
        .unwrap_or_default();
    let body = format!(
        "<div class='skills-container'>{tabs}<div id='{SKILLS_GRID_ID}' class='skills-grid'>{grid}</div></div>"
    );
    section_markup(
        "skills",
        "My Skills",
        Some("A comprehensive overview of my technical expertise and proficiencies"),
        &body,
    )
}

/// Cards for one category; also used to swap the grid when a tab changes.
pub fn skills_grid_markup(category: &SkillCategory) -> String {
    let mut out = String::new();
    for skill in category.skills {
        let level = skill.level.min(SKILL_LEVEL_MAX);
        let mut dots = String::new();
        for i in 1..=SKILL_LEVEL_MAX {
            let filled = if i <= level { " filled" } else { "" };
            _ = write!(dots, "<span class='skill-level-dot{filled}'></span>");
        }
        _ = write!(
            out,
            "<div class='skill-card'><div class='skill-icon skill-icon-{}'></div>\
             <h3 class='skill-name'>{}</h3>\
             <div class='skill-level'>{dots}</div>\
             <span class='skill-level-label'>{}</span></div>",
            escape_html(skill.icon),
            escape_html(skill.name),
            skill_level_label(skill.level)
        );
    }
    out
}

pub fn projects_markup(projects: &[Project], filter: ProjectFilter) -> String {
    let mut filters = format!("<div id='{PROJECT_FILTERS_ID}' class='projects-filters'>");
    for f in [ProjectFilter::All, ProjectFilter::Featured] {
        let class = if f == filter { " active" } else { "" };
        _ = write!(
            filters,
            "<button class='project-filter{class}' {DATA_FILTER}='{}'>{}</button>",
            f.key(),
            f.label()
        );
    }
    filters.push_str("</div>");
    let body = format!(
        "<div class='projects-container'>{filters}<div id='{PROJECTS_GRID_ID}' class='projects-grid'>{}</div></div>",
        projects_grid_markup(projects, filter)
    );
    section_markup(
        "projects",
        "My Projects",
        Some("A selection of my recent work and personal projects"),
        &body,
    )
}

/// Tilt-wrapped project cards passing `filter`, or an empty-state notice.
pub fn projects_grid_markup(projects: &[Project], filter: ProjectFilter) -> String {
    let visible = filter.apply(projects);
    if visible.is_empty() {
        return "<div class='no-projects'><p>No projects found matching the selected filter.</p></div>"
            .to_string();
    }
    let mut out = String::new();
    for project in visible {
        out.push_str(&project_card_markup(project));
    }
    out
}

fn project_card_markup(project: &Project) -> String {
    let mut tech = String::new();
    for t in project.technologies {
        _ = write!(tech, "<span class='tech-tag'>{}</span>", escape_html(t));
    }
    let mut links = String::new();
    if let Some(url) = project.github_link {
        _ = write!(
            links,
            "<a href='{}' target='_blank' rel='noopener noreferrer' class='project-link'>GitHub</a>",
            escape_html(url)
        );
    }
    if let Some(url) = project.live_link {
        _ = write!(
            links,
            "<a href='{}' target='_blank' rel='noopener noreferrer' class='project-link'>Live Demo</a>",
            escape_html(url)
        );
    }
    let badge = if project.featured {
        "<span class='featured-badge'>Featured</span>"
    } else {
        ""
    };
    format!(
        "<div class='tilt-card-premium project-card-wrapper' data-project='{}'>\
         <div class='tilt-card-content'><div class='project-card'>\
         <div class='project-image-container'><img src='{}' alt='{}' class='project-image'/>{badge}</div>\
         <div class='project-content'><h3 class='project-title'>{}</h3>\
         <p class='project-description'>{}</p>\
         <div class='project-technologies'>{tech}</div>\
         <div class='project-links'>{links}</div></div></div></div>\
         <div class='tilt-card-gloss'></div></div>",
        escape_html(project.id),
        escape_html(project.image),
        escape_html(project.title),
        escape_html(project.title),
        escape_html(project.description),
    )
}

fn social_links_markup(info: &PersonalInfo, tag: &str) -> String {
    let mut out = String::new();
    for (label, url) in info.social.entries() {
        let class = label.to_lowercase();
        _ = write!(
            out,
            "<a href='{}' target='_blank' rel='noopener noreferrer' aria-label='{label}'>\
             <{tag} class='social-icon {class}'>{label}</{tag}></a>",
            escape_html(url)
        );
    }
    out
}

fn form_field_markup(field: Field) -> String {
    let key = field.key();
    let (label, placeholder) = match field {
        Field::Name => ("Name", "Your Name"),
        Field::Email => ("Email", "Your Email"),
        Field::Subject => ("Subject", "Subject"),
        Field::Message => ("Message", "Your Message"),
    };
    let control = match field {
        Field::Message => format!(
            "<textarea id='{key}' name='{key}' placeholder='{placeholder}' rows='5'></textarea>"
        ),
        Field::Email => {
            format!("<input type='email' id='{key}' name='{key}' placeholder='{placeholder}'/>")
        }
        _ => format!("<input type='text' id='{key}' name='{key}' placeholder='{placeholder}'/>"),
    };
    format!(
        "<div class='form-group'><label for='{key}'>{label}</label>{control}\
         <span id='{}' class='error-message' style='display:none'></span></div>",
        field_error_id(key)
    )
}

pub fn contact_markup(info: &PersonalInfo) -> String {
    let mut details = String::new();
    let email = escape_html(info.email);
    _ = write!(
        details,
        "<div class='contact-detail-item'><div class='contact-icon'><span class='icon-placeholder'>✉</span></div>\
         <div class='contact-detail-content'><h4>Email</h4><a href='mailto:{email}'>{email}</a></div></div>"
    );
    if let Some(phone) = info.phone {
        let phone = escape_html(phone);
        _ = write!(
            details,
            "<div class='contact-detail-item'><div class='contact-icon'><span class='icon-placeholder'>☎</span></div>\
             <div class='contact-detail-content'><h4>Phone</h4><a href='tel:{phone}'>{phone}</a></div></div>"
        );
    }
    _ = write!(
        details,
        "<div class='contact-detail-item'><div class='contact-icon'><span class='icon-placeholder'>📍</span></div>\
         <div class='contact-detail-content'><h4>Location</h4><p>{}</p></div></div>",
        escape_html(info.location)
    );

    let mut fields = String::new();
    for field in Field::ALL {
        fields.push_str(&form_field_markup(field));
    }

    let body = format!(
        "<div class='contact-container'><div class='contact-info'>\
         <h3 class='contact-info-title'>Get In Touch</h3>\
         <p class='contact-info-text'>I'm currently available for freelance work, full-time positions, or collaborations. \
         Feel free to reach out using the form or through any of the methods below.</p>\
         <div class='contact-details'>{details}</div>\
         <div class='contact-social'><h4 class='contact-social-title'>Connect With Me</h4>\
         <div class='contact-social-links'>{}</div></div></div>\
         <div class='contact-form-container'><form id='{CONTACT_FORM_ID}' class='contact-form' novalidate>\
         <div id='{FORM_RESULT_ID}' class='form-result success' style='display:none'></div>\
         {fields}\
         <div class='form-submit'><button id='{SUBMIT_BUTTON_ID}' type='submit' class='button button-primary button-medium'>{SUBMIT_LABEL}</button></div>\
         </form></div></div>",
        social_links_markup(info, "span"),
    );
    section_markup(
        "contact",
        "Contact Me",
        Some("Have a question or want to work together? Feel free to reach out!"),
        &body,
    )
}

pub fn footer_markup(info: &PersonalInfo, current_year: i32) -> String {
    let mut contact = String::new();
    let email = escape_html(info.email);
    _ = write!(
        contact,
        "<li><span class='contact-label'>Email:</span><a href='mailto:{email}'>{email}</a></li>"
    );
    if let Some(phone) = info.phone {
        let phone = escape_html(phone);
        _ = write!(
            contact,
            "<li><span class='contact-label'>Phone:</span><a href='tel:{phone}'>{phone}</a></li>"
        );
    }
    _ = write!(
        contact,
        "<li><span class='contact-label'>Location:</span><span>{}</span></li>",
        escape_html(info.location)
    );
    format!(
        "<footer class='footer'><div class='footer-container'><div class='footer-top'>\
         <div class='footer-brand'><h3 class='footer-title'>Portfolio</h3>\
         <p class='footer-description'>A showcase of my skills, projects, and professional journey.</p></div>\
         <div class='footer-links'><h4>Quick Links</h4>{}</div>\
         <div class='footer-contact'><h4>Contact</h4><ul>{contact}</ul></div></div>\
         <div class='footer-bottom'><div class='copyright'><p>&copy; {current_year} {}. All Rights Reserved.</p></div>\
         <div class='social-links'>{}</div></div></div>\
         <button id='{BACK_TO_TOP_ID}' class='back-to-top' aria-label='Back to top'><span class='arrow-up'>↑</span></button>\
         </footer>",
        nav_list(""),
        escape_html(info.name),
        social_links_markup(info, "i"),
    )
}

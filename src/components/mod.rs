//! UI Components
//!
//! Page sections and the project modal.

mod collection_view;
mod project_modal;
mod project_grid;
mod blog_grid;
mod skills_list;
mod timeline;
mod contact_form;
mod site_header;
mod hero;

pub use project_modal::{ModalController, ProjectModal};
pub use project_grid::ProjectGrid;
pub use blog_grid::BlogGrid;
pub use skills_list::SkillsList;
pub use timeline::{EducationList, ExperienceList};
pub use contact_form::{ContactEmail, ContactForm};
pub use site_header::{BackToTop, SiteHeader};
pub use hero::{About, Achievements, Hero};

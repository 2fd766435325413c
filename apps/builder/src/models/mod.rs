pub mod resume;
pub mod template;

pub use resume::{
    Certification, Education, Experience, Language, PersonalInfo, Project, Reference, Resume,
    Skill,
};
pub use template::{ColorScheme, Template};

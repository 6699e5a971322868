//! The portfolio's own content, compiled into the binary.

mod experience;
mod posts;
mod profile;
mod projects;
mod skills;

pub use experience::experience;
pub use posts::posts;
pub use profile::profile;
pub use projects::projects;
pub use skills::{highlighted_skills, skill_categories};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

use super::strings;
use crate::content::{Profile, SocialLink};

pub fn profile() -> Profile {
    Profile {
        name: "Bilal Ben Aouad".into(),
        headline: "Senior Frontend Developer".into(),
        intro: "4+ years of experience building scalable, high-performing web applications. \
                Specialized in React.js, Next.js, TypeScript, and modern frontend architecture \
                with a focus on performance optimization and exceptional user experiences."
            .into(),
        about_lead: "Senior Frontend Developer with 4+ years of experience building scalable, \
                     high-performing, and user-focused web applications."
            .into(),
        bio: strings(&[
            "I specialize in React.js, Next.js, TypeScript, and modern frontend architecture, \
             with a strong expertise in performance optimization, responsive UI/UX, and \
             cross-platform development.",
            "Throughout my career, I've had the privilege of working on impactful projects, from \
             building Morocco's first fully digital real estate financing platform to creating \
             enterprise PIM solutions for leading e-commerce platforms.",
            "I'm passionate about clean architecture, developer experience, and creating interfaces \
             that users love. I believe in continuous learning and sharing knowledge with the \
             community through writing and mentoring.",
        ]),
        email: "bilal.benaouad.me@gmail.com".into(),
        phone: "+212 708 215 342".into(),
        location: "Casablanca, Morocco".into(),
        languages: strings(&["English", "French", "Arabic"]),
        socials: vec![
            SocialLink {
                label: "GitHub".into(),
                url: "https://github.com".into(),
            },
            SocialLink {
                label: "LinkedIn".into(),
                url: "https://linkedin.com".into(),
            },
        ],
        available: true,
    }
}

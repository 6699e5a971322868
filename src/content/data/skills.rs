use super::strings;
use crate::content::SkillCategory;

fn category(name: &str, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        name: name.to_owned(),
        skills: strings(skills),
    }
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        category(
            "Frontend Core",
            &["React", "Next.js", "TypeScript", "JavaScript", "HTML5", "CSS3"],
        ),
        category(
            "Styling & UI",
            &["Tailwind CSS", "Styled Components", "CSS Modules", "Framer Motion", "Responsive Design"],
        ),
        category(
            "State & Data",
            &["React Query", "Redux", "Zustand", "React Hook Form", "Zod", "GraphQL"],
        ),
        category(
            "Testing & Quality",
            &["Jest", "React Testing Library", "Unit Testing", "E2E Testing", "ESLint", "TypeScript Strict"],
        ),
        category(
            "Performance & Architecture",
            &["Code Splitting", "Lazy Loading", "Caching Strategies", "Component Architecture", "Design Systems"],
        ),
        category(
            "Backend & Infrastructure",
            &["Spring Boot", "Express", "Prisma", "PostgreSQL", "Docker", "Git"],
        ),
        category(
            "Tools & Platforms",
            &["Vite", "Webpack", "Shopify", "Socket.IO", "OAuth", "CI/CD"],
        ),
    ]
}

pub fn highlighted_skills() -> Vec<String> {
    strings(&[
        "React",
        "Next.js",
        "TypeScript",
        "Tailwind CSS",
        "React Query",
        "Performance Optimization",
    ])
}

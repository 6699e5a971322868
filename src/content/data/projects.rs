use super::strings;
use crate::content::Project;

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "pim-platform".into(),
            title: "Product Information Management Platform".into(),
            description: "Enterprise PIM solution replacing paid Octopia platform with dynamic product management, adaptable forms, and centralized configuration.".into(),
            long_description: Some("Led the complete frontend development of a comprehensive Product Information Management platform. Features include dynamic form generation based on product categories, conditional field logic, centralized configuration files, and a modern UI designed for efficiency. The platform handles thousands of products with complex attribute hierarchies.".into()),
            tags: strings(&["React", "TypeScript", "React Query", "Enterprise", "E-commerce"]),
            image: None,
            demo_url: None,
            github_url: None,
            featured: true,
        },
        Project {
            id: "loan-simulator".into(),
            title: "Real Estate Loan Simulation Engine".into(),
            description: "Morocco's first fully digital real estate financing platform serving 3M+ users with CIH Bank integration.".into(),
            long_description: Some("Developed a sophisticated JSON-driven loan simulation engine that revolutionized real estate financing in Morocco. The system supports multiple loan types (purchase, construction, credit buyback), adapts forms based on property types, and provides real-time validation with seamless step navigation.".into()),
            tags: strings(&["Next.js", "React Hook Form", "Zod", "FinTech", "TypeScript"]),
            image: None,
            demo_url: None,
            github_url: None,
            featured: true,
        },
        Project {
            id: "ai-document-processor".into(),
            title: "AI-Powered Document Processing System".into(),
            description: "Intelligent document upload system with AI classification, anomaly detection, and structured data extraction.".into(),
            long_description: Some("Designed and implemented a cutting-edge document processing system that leverages AI for automatic document classification, anomaly detection, and data extraction. Features include floating modal UI for multitasking, real-time processing feedback, and integration with backend ML services.".into()),
            tags: strings(&["React", "AI/ML", "TypeScript", "UX Design"]),
            image: None,
            demo_url: None,
            github_url: None,
            featured: true,
        },
        Project {
            id: "kpi-dashboards".into(),
            title: "Real-Time KPI Dashboards".into(),
            description: "Business intelligence dashboards using Chart.js & D3.js for actionable insights across retail operations.".into(),
            long_description: Some("Built comprehensive real-time dashboard system for one of Morocco's largest retail groups. Visualizations include sales trends, inventory levels, customer analytics, and operational KPIs. Optimized for performance with large datasets and real-time WebSocket updates.".into()),
            tags: strings(&["D3.js", "Chart.js", "React", "WebSocket", "Analytics"]),
            image: None,
            demo_url: None,
            github_url: None,
            featured: false,
        },
        Project {
            id: "mobile-banking".into(),
            title: "Cross-Platform Banking Application".into(),
            description: "Responsive banking platform with React Native (mobile) & React.js (web) featuring biometric auth and real-time transactions.".into(),
            long_description: Some("Developed a secure, cross-platform banking application for Banque Populaire. Implemented biometric authentication, multi-factor authentication, real-time account management, instant transfers, bill payments, and spending analytics. Ensured compliance with banking-grade security standards.".into()),
            tags: strings(&["React Native", "React", "TypeScript", "Security", "FinTech"]),
            image: None,
            demo_url: None,
            github_url: None,
            featured: false,
        },
        Project {
            id: "rbac-system".into(),
            title: "Dynamic RBAC Access Control System".into(),
            description: "Comprehensive role-based access control with dynamic UI rendering and feature access control across enterprise platform.".into(),
            long_description: Some("Implemented a flexible Role-Based Access Control system that dynamically renders UI components based on user permissions. Features include role hierarchy management, feature flags, granular permission controls, and seamless integration with backend authorization services.".into()),
            tags: strings(&["React", "TypeScript", "Security", "Enterprise", "Architecture"]),
            image: None,
            demo_url: None,
            github_url: None,
            featured: false,
        },
    ]
}

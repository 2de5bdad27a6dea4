//! Built-in replacement points, used when no persisted catalog exists.

pub const DEFAULT_REPLACEMENT_POINTS: &[&str] = &[
    "Spearheaded development of scalable web applications using modern JavaScript frameworks, resulting in 40% improved user engagement",
    "Engineered high-performance RESTful APIs using Node.js and Express, processing 10,000+ requests per minute with 99.9% uptime",
    "Implemented comprehensive testing strategies including unit, integration, and E2E tests, achieving 95% code coverage",
    "Collaborated with cross-functional teams using Agile methodologies to deliver features 25% faster than previous sprints",
    "Optimized database queries and implemented caching strategies, reducing response times by 60%",
    "Developed responsive user interfaces using React and TypeScript, supporting 10+ different device types",
    "Integrated third-party APIs and services, enabling seamless data synchronization across multiple platforms",
    "Mentored junior developers and conducted code reviews, improving team code quality by 30%",
    "Implemented CI/CD pipelines using GitHub Actions, reducing deployment time from hours to minutes",
    "Designed and built microservices architecture, improving system scalability and maintainability",
    "Created comprehensive documentation and technical specifications, reducing onboarding time for new team members by 50%",
    "Utilized Docker and Kubernetes for containerization and orchestration, ensuring consistent deployment environments",
    "Implemented security best practices including authentication, authorization, and data encryption",
    "Developed real-time features using WebSockets and Server-Sent Events, enhancing user experience",
    "Optimized application performance through code splitting, lazy loading, and bundle optimization techniques",
    "Built data visualization dashboards using D3.js and Chart.js, enabling stakeholders to make data-driven decisions",
    "Implemented automated monitoring and alerting systems, reducing system downtime by 80%",
    "Led migration from legacy systems to modern tech stack, improving performance and reducing maintenance costs",
    "Developed mobile-responsive applications using Progressive Web App (PWA) technologies",
    "Implemented GraphQL APIs for efficient data fetching, reducing network requests by 40%",
    "Created reusable component libraries and design systems, improving development efficiency across teams",
    "Integrated machine learning models into web applications, enabling intelligent features and recommendations",
    "Implemented advanced state management solutions using Redux and Context API for complex applications",
    "Developed automated testing frameworks and tools, reducing manual testing effort by 70%",
    "Built serverless functions using AWS Lambda and Vercel, optimizing costs and improving scalability",
    "Implemented advanced security measures including OWASP compliance and vulnerability assessments",
    "Created data migration scripts and ETL pipelines, successfully migrating 1M+ records with zero data loss",
    "Developed real-time collaboration features using operational transformation and conflict resolution algorithms",
    "Implemented internationalization (i18n) and localization (l10n) support for global user base",
    "Built advanced search functionality using Elasticsearch, improving search relevance and speed by 300%",
    "Developed custom build tools and webpack configurations, optimizing development workflow and build times",
    "Implemented advanced caching strategies using Redis and CDN, reducing server load by 50%",
    "Created automated deployment and rollback procedures, ensuring zero-downtime deployments",
    "Built comprehensive logging and monitoring solutions using ELK stack, improving debugging efficiency",
    "Developed API rate limiting and throttling mechanisms, ensuring fair usage and system stability",
];

pub fn default_points() -> Vec<String> {
    DEFAULT_REPLACEMENT_POINTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_nonempty() {
        let points = default_points();
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| !p.trim().is_empty()));
    }
}

//! Hard-coded content of the site.
//!
//! Catalogs are listed newest first: the blog's "recent" slice is taken from the top of [`BLOG_POSTS`].
use futuretech_catalog::{BlogCategory, BlogPost, Project, ProjectCategory, ProjectStatus};

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "The Future of Artificial Intelligence in Business Operations",
        excerpt: "Discover how AI is transforming business operations and what leaders need to know to stay ahead of the curve.",
        category: BlogCategory::Technology,
        author: "Dr. Sarah Chen",
        date: "2024-03-15",
        read_time: "8 min read",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: true,
        tags: &["AI", "Business", "Future Tech"],
    },
    BlogPost {
        id: 2,
        title: "Building Sustainable Smart Cities: A Comprehensive Guide",
        excerpt: "Learn about the technologies and strategies behind creating environmentally conscious urban environments.",
        category: BlogCategory::Innovation,
        author: "Michael Rodriguez",
        date: "2024-03-12",
        read_time: "12 min read",
        image: "https://images.pexels.com/photos/2804282/pexels-photo-2804282.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: false,
        tags: &["Smart Cities", "Sustainability", "IoT"],
    },
    BlogPost {
        id: 3,
        title: "Quantum Computing: Breaking the Barriers of Traditional Processing",
        excerpt: "An in-depth look at quantum computing advancements and their potential impact on various industries.",
        category: BlogCategory::Technology,
        author: "Prof. James Liu",
        date: "2024-03-10",
        read_time: "15 min read",
        image: "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: true,
        tags: &["Quantum Computing", "Innovation", "Science"],
    },
    BlogPost {
        id: 4,
        title: "Cybersecurity in the Age of Remote Work",
        excerpt: "Essential security practices and technologies for protecting distributed workforces.",
        category: BlogCategory::Industry,
        author: "Anna Thompson",
        date: "2024-03-08",
        read_time: "6 min read",
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: false,
        tags: &["Cybersecurity", "Remote Work", "Technology"],
    },
    BlogPost {
        id: 5,
        title: "Getting Started with Machine Learning: A Developer's Guide",
        excerpt: "A comprehensive tutorial for developers looking to integrate machine learning into their applications.",
        category: BlogCategory::Tutorials,
        author: "David Kim",
        date: "2024-03-05",
        read_time: "20 min read",
        image: "https://images.pexels.com/photos/1181298/pexels-photo-1181298.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: false,
        tags: &["Machine Learning", "Tutorial", "Development"],
    },
    BlogPost {
        id: 6,
        title: "The Rise of Edge Computing: Bringing Processing Power Closer",
        excerpt: "Explore how edge computing is revolutionizing data processing and reducing latency for real-time applications.",
        category: BlogCategory::Innovation,
        author: "Lisa Zhang",
        date: "2024-03-03",
        read_time: "10 min read",
        image: "https://images.pexels.com/photos/325229/pexels-photo-325229.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: false,
        tags: &["Edge Computing", "Cloud", "Performance"],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Smart City Infrastructure",
        description: "Revolutionary IoT-enabled smart city platform integrating traffic management, energy optimization, and citizen services.",
        category: ProjectCategory::Commercial,
        location: "New York, USA",
        year: "2024",
        image: "https://images.pexels.com/photos/2804282/pexels-photo-2804282.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["IoT", "AI", "Cloud Computing", "Big Data"],
        status: ProjectStatus::Completed,
    },
    Project {
        id: 2,
        title: "Autonomous Manufacturing Plant",
        description: "Fully automated manufacturing facility with AI-driven quality control and predictive maintenance systems.",
        category: ProjectCategory::Industrial,
        location: "Tokyo, Japan",
        year: "2024",
        image: "https://images.pexels.com/photos/1108101/pexels-photo-1108101.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Robotics", "Machine Learning", "Computer Vision", "Automation"],
        status: ProjectStatus::InProgress,
    },
    Project {
        id: 3,
        title: "Next-Gen Office Complex",
        description: "Intelligent office building with adaptive lighting, climate control, and seamless collaboration technologies.",
        category: ProjectCategory::SmartOffices,
        location: "London, UK",
        year: "2023",
        image: "https://images.pexels.com/photos/380769/pexels-photo-380769.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Smart Sensors", "Building Automation", "AR/VR", "Unified Communications"],
        status: ProjectStatus::Completed,
    },
    Project {
        id: 4,
        title: "Sustainable Energy Grid",
        description: "Advanced renewable energy distribution system with AI-powered load balancing and storage optimization.",
        category: ProjectCategory::Industrial,
        location: "Berlin, Germany",
        year: "2024",
        image: "https://images.pexels.com/photos/9799725/pexels-photo-9799725.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Renewable Energy", "Grid Management", "Energy Storage", "Analytics"],
        status: ProjectStatus::InProgress,
    },
    Project {
        id: 5,
        title: "Luxury Smart Residences",
        description: "Premium residential complex featuring AI concierge services, biometric security, and environmental automation.",
        category: ProjectCategory::Residential,
        location: "Dubai, UAE",
        year: "2023",
        image: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Home Automation", "Biometrics", "AI Assistant", "Security Systems"],
        status: ProjectStatus::Completed,
    },
    Project {
        id: 6,
        title: "Digital Healthcare Hub",
        description: "Integrated healthcare facility with telemedicine capabilities, AI diagnostics, and patient monitoring systems.",
        category: ProjectCategory::Commercial,
        location: "Singapore",
        year: "2024",
        image: "https://images.pexels.com/photos/2324837/pexels-photo-2324837.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Telemedicine", "AI Diagnostics", "Patient Monitoring", "Data Analytics"],
        status: ProjectStatus::Planning,
    },
];

/// A headline number, as shown in stat grids.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static PROJECT_STATS: &[Stat] = &[
    Stat { value: "500+", label: "Projects Delivered" },
    Stat { value: "50+", label: "Countries Served" },
    Stat { value: "98%", label: "Success Rate" },
    Stat { value: "24/7", label: "Global Support" },
];

/// Title and description pairs, used by the value propositions of the home and about pages.
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub static HOME_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Lightning Fast",
        description: "Experience unprecedented speed with our cutting-edge technology that revolutionizes the way you work.",
    },
    Highlight {
        title: "Ultra Secure",
        description: "Military-grade security protocols ensure your data remains protected with quantum encryption standards.",
    },
    Highlight {
        title: "Innovation First",
        description: "Pioneering solutions that push boundaries and redefine what's possible in the digital landscape.",
    },
    Highlight {
        title: "Global Scale",
        description: "Seamlessly scale across continents with our distributed infrastructure and intelligent load balancing.",
    },
];

pub static VALUES: &[Highlight] = &[
    Highlight {
        title: "Collaboration",
        description: "We believe in the power of teamwork and collective intelligence to solve complex challenges.",
    },
    Highlight {
        title: "Precision",
        description: "Every detail matters. We deliver solutions with unmatched accuracy and attention to detail.",
    },
    Highlight {
        title: "Excellence",
        description: "We set the highest standards and continuously strive to exceed expectations in everything we do.",
    },
    Highlight {
        title: "Innovation",
        description: "We embrace change and constantly push boundaries to create breakthrough solutions.",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Clients served by the end of the year.
    pub clients: &'static str,
}

pub static MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2020",
        title: "Foundation",
        description: "Started with a vision to revolutionize technology",
        clients: "1",
    },
    Milestone {
        year: "2021",
        title: "Growth",
        description: "Expanded team and launched first products",
        clients: "50",
    },
    Milestone {
        year: "2022",
        title: "Innovation",
        description: "Breakthrough in AI and machine learning",
        clients: "500",
    },
    Milestone {
        year: "2023",
        title: "Global Reach",
        description: "International expansion and partnerships",
        clients: "5000",
    },
    Milestone {
        year: "2024",
        title: "Future Vision",
        description: "Leading the next wave of digital transformation",
        clients: "50000",
    },
];

/// A tab of the features page.
pub struct FeatureArea {
    pub slug: &'static str,
    pub title: &'static str,
    pub features: &'static [&'static str],
}

pub static FEATURE_AREAS: &[FeatureArea] = &[
    FeatureArea {
        slug: "ai-machine-learning",
        title: "AI & Machine Learning",
        features: &[
            "Advanced Neural Networks",
            "Real-time Data Processing",
            "Predictive Analytics",
            "Natural Language Processing",
            "Computer Vision Integration",
        ],
    },
    FeatureArea {
        slug: "data-infrastructure",
        title: "Data Infrastructure",
        features: &[
            "Distributed Database Systems",
            "Real-time Synchronization",
            "Advanced Query Optimization",
            "Data Lake Architecture",
            "Automated Backup & Recovery",
        ],
    },
    FeatureArea {
        slug: "cloud-solutions",
        title: "Cloud Solutions",
        features: &[
            "Multi-Cloud Deployment",
            "Serverless Architecture",
            "Auto-scaling Infrastructure",
            "Container Orchestration",
            "Edge Computing Network",
        ],
    },
    FeatureArea {
        slug: "security-framework",
        title: "Security Framework",
        features: &[
            "Zero-Trust Architecture",
            "End-to-end Encryption",
            "Biometric Authentication",
            "Threat Intelligence",
            "Compliance Automation",
        ],
    },
];

pub struct DetailedFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub capabilities: &'static [&'static str],
}

pub static DETAILED_FEATURES: &[DetailedFeature] = &[
    DetailedFeature {
        title: "Quantum Processing Power",
        description: "Harness the power of quantum computing for unprecedented computational capabilities.",
        image: "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg?auto=compress&cs=tinysrgb&w=800",
        capabilities: &["100x faster processing", "Complex problem solving", "Advanced optimization"],
    },
    DetailedFeature {
        title: "Global Network Architecture",
        description: "Deploy across our worldwide infrastructure with intelligent load balancing.",
        image: "https://images.pexels.com/photos/1181298/pexels-photo-1181298.jpeg?auto=compress&cs=tinysrgb&w=800",
        capabilities: &["99.99% uptime", "Sub-second latency", "Automatic failover"],
    },
    DetailedFeature {
        title: "Intelligent Automation",
        description: "AI-driven automation that learns and adapts to your workflow patterns.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        capabilities: &["Smart workflow optimization", "Predictive maintenance", "Self-healing systems"],
    },
];

pub struct ContactChannel {
    pub title: &'static str,
    pub info: &'static str,
    pub description: &'static str,
}

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email Us",
        info: "hello@futuretech.com",
        description: "Send us an email anytime and we'll get back to you within 24 hours.",
    },
    ContactChannel {
        title: "Call Us",
        info: "+1 (555) 123-4567",
        description: "Speak directly with our team during business hours.",
    },
    ContactChannel {
        title: "Visit Us",
        info: "123 Innovation Drive, Tech City, TC 12345",
        description: "Come visit our headquarters and experience the future firsthand.",
    },
    ContactChannel {
        title: "Global Presence",
        info: "25+ Countries Worldwide",
        description: "We have offices and partners across the globe to serve you better.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficeStatus {
    Open,
    Closed,
}

pub struct Office {
    pub city: &'static str,
    pub country: &'static str,
    pub timezone: &'static str,
    pub status: OfficeStatus,
}

pub static OFFICES: &[Office] = &[
    Office { city: "New York", country: "USA", timezone: "EST", status: OfficeStatus::Open },
    Office { city: "London", country: "UK", timezone: "GMT", status: OfficeStatus::Open },
    Office { city: "Tokyo", country: "Japan", timezone: "JST", status: OfficeStatus::Closed },
    Office { city: "Sydney", country: "Australia", timezone: "AEST", status: OfficeStatus::Closed },
];

#[cfg(test)]
mod tests {
    use super::*;
    use futuretech_catalog::{CatalogItem, ensure_newest_first};
    use std::collections::HashSet;

    fn unique_ids<T: CatalogItem>(catalog: &[T]) -> bool {
        let ids: HashSet<u32> = catalog.iter().map(CatalogItem::id).collect();
        ids.len() == catalog.len()
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        assert!(unique_ids(BLOG_POSTS));
        assert!(unique_ids(PROJECTS));
    }

    #[test]
    fn test_blog_is_newest_first() {
        ensure_newest_first(BLOG_POSTS).unwrap();
    }

    #[test]
    fn test_two_posts_are_featured() {
        let featured: Vec<u32> = BLOG_POSTS
            .iter()
            .filter(|post| post.featured)
            .map(|post| post.id)
            .collect();
        assert_eq!(featured, vec![1, 3]);
    }

    #[test]
    fn test_feature_area_slugs_are_unique() {
        let slugs: HashSet<&str> = FEATURE_AREAS.iter().map(|area| area.slug).collect();
        assert_eq!(slugs.len(), FEATURE_AREAS.len());
    }
}

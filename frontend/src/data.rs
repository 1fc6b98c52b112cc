//! Read-only page fixtures.

use chrono::NaiveDate;

pub const ALL: &str = "All";

pub struct PlanFeature {
    pub name: &'static str,
    pub included: bool,
}

pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly: i64,
    pub yearly: i64,
    pub unit: &'static str,
    pub features: &'static [PlanFeature],
    pub cta: &'static str,
    pub popular: bool,
}

impl Plan {
    pub fn price(&self, yearly: bool) -> i64 {
        if yearly {
            self.yearly
        } else {
            self.monthly
        }
    }
}

const fn yes(name: &'static str) -> PlanFeature {
    PlanFeature { name, included: true }
}

const fn no(name: &'static str) -> PlanFeature {
    PlanFeature { name, included: false }
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        description: "For individuals getting started with AI image generation.",
        monthly: 0,
        yearly: 0,
        unit: "Free forever",
        features: &[
            yes("50 generations/month"),
            yes("720p resolution"),
            yes("5 base styles"),
            yes("Community support"),
            yes("Basic exports"),
            no("API access"),
            no("Commercial license"),
            no("Priority queue"),
        ],
        cta: "Start Free",
        popular: false,
    },
    Plan {
        id: "pro",
        name: "Pro",
        description: "For professional creators who need unlimited power.",
        monthly: 29,
        yearly: 19,
        unit: "/month",
        features: &[
            yes("Unlimited generations"),
            yes("4K Ultra HD"),
            yes("50+ premium styles"),
            yes("Priority support"),
            yes("All export formats"),
            yes("API (10K req/mo)"),
            yes("Commercial license"),
            yes("Priority queue"),
        ],
        cta: "Start 14-Day Trial",
        popular: true,
    },
    Plan {
        id: "team",
        name: "Team",
        description: "For teams and agencies scaling their creative output.",
        monthly: 79,
        yearly: 59,
        unit: "/seat/month",
        features: &[
            yes("Everything in Pro"),
            yes("Up to 10 seats"),
            yes("Shared workspace"),
            yes("Admin dashboard"),
            yes("SSO authentication"),
            yes("API (100K req/mo)"),
            yes("Account manager"),
            yes("Custom training"),
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub const PRICING_FAQS: &[(&str, &str)] = &[
    ("Can I switch plans at any time?", "Yes. Upgrades apply immediately and downgrades take effect at the end of your billing cycle."),
    ("What counts as a generation?", "Every image you create counts as one generation, including variations and upscales."),
    ("Do unused generations roll over?", "Generations reset at the start of each billing period and do not roll over."),
    ("Is there a free trial for Pro?", "Pro comes with a 14-day trial. No credit card is required to start."),
];

pub const TRUSTED_BY: &[&str] = &["Spotify", "Airbnb", "Netflix", "Stripe", "Notion", "Figma"];

pub const HERO_WORDS: &[&str] = &["Imagination", "Creativity", "Vision", "Dreams", "Ideas"];

pub struct Stat {
    pub value: f64,
    pub decimals: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 10.0, decimals: 0, suffix: "M+", label: "Images generated" },
    Stat { value: 150.0, decimals: 0, suffix: "K", label: "Creators" },
    Stat { value: 4.9, decimals: 1, suffix: "/5", label: "Average rating" },
    Stat { value: 2.3, decimals: 1, suffix: "s", label: "Average render time" },
];

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { title: "Photorealistic output", description: "Lighting, depth and texture that hold up at print resolution.", tag: "Quality" },
    Feature { title: "Style control", description: "Blend presets or describe your own look in plain words.", tag: "Creative" },
    Feature { title: "Instant variations", description: "Branch any result into four new takes with one click.", tag: "Speed" },
    Feature { title: "Smart upscaling", description: "Take drafts to 4K without losing detail.", tag: "Quality" },
    Feature { title: "Team workspaces", description: "Shared boards, comments and version history for every project.", tag: "Collaboration" },
    Feature { title: "Developer API", description: "The same engine behind the studio, one request away.", tag: "Platform" },
];

pub struct Capability {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Generate",
        lines: &["Text to image in seconds", "Negative prompts for fine control", "Seeds for reproducible results"],
    },
    Capability {
        title: "Edit",
        lines: &["Inpaint any region", "Extend beyond the frame", "Swap backgrounds in one pass"],
    },
    Capability {
        title: "Deliver",
        lines: &["Export PNG, JPG, WebP or TIFF", "Commercial license on paid plans", "Batch downloads for teams"],
    },
];

pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub likes: u32,
    pub image: &'static str,
}

pub const GALLERY_CATEGORIES: &[&str] =
    &[ALL, "Portraits", "Landscapes", "Abstract", "Fantasy", "Sci-Fi", "Architecture", "Nature"];

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { id: 1, title: "Ethereal forest spirit", author: "Lena Park", category: "Fantasy", likes: 2341, image: "/assets/gallery/forest-spirit.jpg" },
    GalleryItem { id: 2, title: "Futuristic cityscape", author: "Omar Haddad", category: "Sci-Fi", likes: 1876, image: "/assets/gallery/cityscape.jpg" },
    GalleryItem { id: 3, title: "Mountain lake reflection", author: "Ines Duarte", category: "Landscapes", likes: 3120, image: "/assets/gallery/mountain-lake.jpg" },
    GalleryItem { id: 4, title: "Ancient temple ruins", author: "Kenji Sato", category: "Architecture", likes: 1450, image: "/assets/gallery/temple.jpg" },
    GalleryItem { id: 5, title: "Portrait in golden light", author: "Ada Moreno", category: "Portraits", likes: 2890, image: "/assets/gallery/golden-portrait.jpg" },
    GalleryItem { id: 6, title: "Liquid chrome study", author: "Theo Brandt", category: "Abstract", likes: 980, image: "/assets/gallery/chrome.jpg" },
    GalleryItem { id: 7, title: "Morning fern macro", author: "Ines Duarte", category: "Nature", likes: 1211, image: "/assets/gallery/fern.jpg" },
    GalleryItem { id: 8, title: "Orbital greenhouse", author: "Omar Haddad", category: "Sci-Fi", likes: 2055, image: "/assets/gallery/greenhouse.jpg" },
];

/// Items in `category` whose title or author contains `query`, case-insensitively.
pub fn filter_gallery(category: &str, query: &str) -> Vec<&'static GalleryItem> {
    let query = query.trim().to_lowercase();
    GALLERY
        .iter()
        .filter(|item| category == ALL || item.category == category)
        .filter(|item| {
            query.is_empty()
                || item.title.to_lowercase().contains(&query)
                || item.author.to_lowercase().contains(&query)
        })
        .collect()
}

pub struct StylePreset {
    pub id: &'static str,
    pub label: &'static str,
}

pub const STYLE_PRESETS: &[StylePreset] = &[
    StylePreset { id: "photorealistic", label: "Photo" },
    StylePreset { id: "digital-art", label: "Digital" },
    StylePreset { id: "oil-painting", label: "Oil Paint" },
    StylePreset { id: "watercolor", label: "Watercolor" },
    StylePreset { id: "3d-render", label: "3D" },
    StylePreset { id: "pencil-sketch", label: "Sketch" },
    StylePreset { id: "landscape", label: "Landscape" },
];

pub const ASPECT_RATIOS: &[&str] = &["1:1", "16:9", "9:16", "4:3", "3:4"];

pub const QUICK_PROMPTS: &[&str] = &[
    "Majestic dragon over ancient mountains",
    "Cyberpunk street with neon lights",
    "Portrait of a warrior in golden armor",
    "Serene Japanese garden with cherry blossoms",
];

pub struct Post {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    pub published: (i32, u32, u32),
    pub read_minutes: u32,
    pub featured: bool,
}

impl Post {
    /// e.g. "Dec 15, 2024". Empty if the fixture date is invalid.
    pub fn date_label(&self) -> String {
        let (y, m, d) = self.published;
        NaiveDate::from_ymd_opt(y, m, d)
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn slug(&self) -> String {
        self.title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

pub const BLOG_CATEGORIES: &[&str] = &[ALL, "Product", "Engineering", "Design", "Company", "Tutorials"];

pub const POSTS: &[Post] = &[
    Post {
        title: "Introducing MATTR 3.0: The Future of AI Image Generation",
        excerpt: "The biggest update to MATTR yet, with breakthrough improvements in quality, speed and creative control.",
        category: "Product",
        author: "Alexandra Chen",
        published: (2024, 12, 15),
        read_minutes: 5,
        featured: true,
    },
    Post {
        title: "How We Scaled to 10 Million Images Per Day",
        excerpt: "The infrastructure challenges we hit and the system we built to handle them.",
        category: "Engineering",
        author: "Marcus Williams",
        published: (2024, 12, 10),
        read_minutes: 12,
        featured: false,
    },
    Post {
        title: "The Design Philosophy Behind MATTR",
        excerpt: "Why we believe simplicity is the ultimate sophistication in AI tools.",
        category: "Design",
        author: "David Mueller",
        published: (2024, 12, 5),
        read_minutes: 7,
        featured: false,
    },
    Post {
        title: "Building Ethical AI: Our Approach",
        excerpt: "How we develop responsibly while pushing the boundaries of creativity.",
        category: "Company",
        author: "Priya Patel",
        published: (2024, 11, 28),
        read_minutes: 8,
        featured: false,
    },
    Post {
        title: "Mastering Style Transfer with MATTR",
        excerpt: "A guide to creating striking art by combining different artistic styles.",
        category: "Tutorials",
        author: "Sarah Kim",
        published: (2024, 11, 20),
        read_minutes: 10,
        featured: false,
    },
    Post {
        title: "Our Series B: What's Next for MATTR",
        excerpt: "Announcing our $50M Series B and our vision for the future of creative AI.",
        category: "Company",
        author: "Alexandra Chen",
        published: (2024, 11, 15),
        read_minutes: 4,
        featured: false,
    },
];

pub fn posts_in(category: &str) -> Vec<&'static Post> {
    POSTS.iter().filter(|p| category == ALL || p.category == category).collect()
}

pub struct Opening {
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

pub const DEPARTMENTS: &[&str] = &[ALL, "Engineering", "Design", "Product", "Marketing", "Operations"];

pub const OPENINGS: &[Opening] = &[
    Opening { title: "Senior Frontend Engineer", department: "Engineering", location: "Remote", kind: "Full-time" },
    Opening { title: "ML Research Engineer", department: "Engineering", location: "San Francisco", kind: "Full-time" },
    Opening { title: "Senior Product Designer", department: "Design", location: "Remote", kind: "Full-time" },
    Opening { title: "Product Manager, AI", department: "Product", location: "New York", kind: "Full-time" },
    Opening { title: "Growth Marketing Lead", department: "Marketing", location: "Remote", kind: "Full-time" },
    Opening { title: "Backend Engineer", department: "Engineering", location: "London", kind: "Full-time" },
    Opening { title: "Design Systems Engineer", department: "Design", location: "Remote", kind: "Full-time" },
    Opening { title: "Technical Writer", department: "Product", location: "Remote", kind: "Contract" },
];

pub fn openings_in(department: &str) -> Vec<&'static Opening> {
    OPENINGS.iter().filter(|o| department == ALL || o.department == department).collect()
}

pub const PERKS: &[(&str, &str)] = &[
    ("Remote First", "Work from anywhere in the world"),
    ("Health & Wellness", "Comprehensive health coverage"),
    ("Equity", "Ownership in what you build"),
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { quote: "MATTR replaced three tools in our pipeline. Concepts that took a day now take an hour.", name: "Sofia Lindqvist", role: "Art Director, Northwind" },
    Testimonial { quote: "The style presets are the first ones that don't all look the same.", name: "Daniel Okafor", role: "Illustrator" },
    Testimonial { quote: "Our campaign mockups go from brief to review in a single meeting.", name: "Hana Ito", role: "Creative Lead, Brightside" },
];

pub const CONTACT_OPTIONS: &[(&str, &str, &str)] = &[
    ("Sales", "Talk to us about Team and Enterprise plans.", "sales@mattr.ai"),
    ("Support", "Questions about your account or a render.", "support@mattr.ai"),
    ("Press", "Media enquiries and brand assets.", "press@mattr.ai"),
];

pub const CONTACT_FAQS: &[(&str, &str)] = &[
    ("How fast do you reply?", "Usually within one business day, faster on paid plans."),
    ("Do you offer custom model training?", "Yes, on the Team plan and above. Mention it in your message."),
    ("Where are you based?", "We are a remote team with hubs in San Francisco and London."),
];


pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Elena Rodriguez", role: "Co-founder & CEO", expertise: "AI & Machine Learning" },
    TeamMember { name: "Kai Nakamura", role: "Co-founder & CTO", expertise: "Systems Architecture" },
    TeamMember { name: "Zara Okafor", role: "Head of Design", expertise: "Product Design" },
];

pub const VALUES: &[(&str, &str)] = &[
    ("Innovation First", "We push the boundaries of what's possible with AI, constantly exploring new frontiers."),
    ("Creator Centric", "Every decision we make starts with our creators. Their success is our success."),
    ("Open & Transparent", "We believe in building in public, sharing our learnings, and being honest."),
    ("Ethical AI", "We're committed to developing AI responsibly, with safeguards for societal impact."),
];

pub const MILESTONES: &[(&str, &str)] = &[
    ("2021", "Founded in San Francisco"),
    ("2022", "Raised $8M seed round"),
    ("2023", "Launched to 100K creators"),
    ("2024", "Expanded globally"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseKind {
    Major,
    Feature,
    Improvement,
}

impl ReleaseKind {
    pub fn label(self) -> &'static str {
        match self {
            ReleaseKind::Major => "Major",
            ReleaseKind::Feature => "Feature",
            ReleaseKind::Improvement => "Improvement",
        }
    }
}

pub struct Release {
    pub version: &'static str,
    pub published: (i32, u32, u32),
    pub title: &'static str,
    pub kind: ReleaseKind,
    pub changes: &'static [&'static str],
}

pub const RELEASES: &[Release] = &[
    Release {
        version: "3.2.0",
        published: (2024, 12, 15),
        title: "Enhanced Style Controls",
        kind: ReleaseKind::Feature,
        changes: &[
            "New style mixing interface for combining multiple artistic styles",
            "Advanced color palette controls",
            "Improved prompt suggestions based on selected styles",
            "20% faster generation times for complex prompts",
        ],
    },
    Release {
        version: "3.1.5",
        published: (2024, 12, 8),
        title: "Performance Improvements",
        kind: ReleaseKind::Improvement,
        changes: &[
            "Reduced API latency by 35%",
            "Better error handling and retry logic",
            "Improved image quality at lower resolutions",
            "Fixed memory leak in batch processing",
        ],
    },
    Release {
        version: "3.1.0",
        published: (2024, 11, 28),
        title: "New Models & API Updates",
        kind: ReleaseKind::Feature,
        changes: &[
            "Introduced MATTR-Artistic model optimized for fine art styles",
            "New /v1/models endpoint for listing available models",
            "Webhook support for async generation callbacks",
            "Extended rate limits for Pro users",
        ],
    },
    Release {
        version: "3.0.0",
        published: (2024, 11, 15),
        title: "MATTR 3.0 - Major Release",
        kind: ReleaseKind::Major,
        changes: &[
            "Complete rewrite of core generation engine",
            "2x improvement in image quality",
            "New web interface with real-time preview",
            "Team collaboration features",
            "Enterprise SSO support",
            "99.9% uptime SLA",
        ],
    },
];

/// Long-form date for a `(year, month, day)` fixture, e.g. "December 15, 2024".
pub fn long_date((y, m, d): (i32, u32, u32)) -> String {
    NaiveDate::from_ymd_opt(y, m, d)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { method: "POST", path: "/v1/generate", description: "Generate images from text", badge: Some("Popular") },
    Endpoint { method: "POST", path: "/v1/img2img", description: "Transform existing images", badge: None },
    Endpoint { method: "POST", path: "/v1/inpaint", description: "Edit specific areas", badge: None },
    Endpoint { method: "POST", path: "/v1/upscale", description: "Upscale to 4x resolution", badge: Some("New") },
    Endpoint { method: "GET", path: "/v1/styles", description: "List available art styles", badge: None },
    Endpoint { method: "GET", path: "/v1/models", description: "List models and versions", badge: None },
];

pub const SDKS: &[(&str, &str)] = &[
    ("JavaScript", "v2.4.0"),
    ("Python", "v2.4.0"),
    ("Ruby", "v2.3.0"),
    ("Go", "v2.2.0"),
    ("PHP", "v2.1.0"),
    ("Swift", "v1.9.0"),
];

pub struct Service {
    pub name: &'static str,
    pub operational: bool,
    pub uptime: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service { name: "API", operational: true, uptime: "99.99%" },
    Service { name: "Web Application", operational: true, uptime: "99.98%" },
    Service { name: "Image Generation", operational: true, uptime: "99.97%" },
    Service { name: "Authentication", operational: true, uptime: "100%" },
    Service { name: "Dashboard", operational: true, uptime: "99.99%" },
    Service { name: "Webhooks", operational: true, uptime: "99.95%" },
];

pub struct Incident {
    pub published: (i32, u32, u32),
    pub title: &'static str,
    pub status: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const INCIDENTS: &[Incident] = &[
    Incident {
        published: (2024, 12, 10),
        title: "Elevated API Latency",
        status: "resolved",
        duration: "23 minutes",
        description: "Some users experienced increased response times. Issue was identified and resolved.",
    },
    Incident {
        published: (2024, 11, 28),
        title: "Scheduled Maintenance",
        status: "completed",
        duration: "2 hours",
        description: "Planned maintenance for database upgrades. All services were restored successfully.",
    },
];

pub const UPTIME_DAYS: usize = 90;

/// Days (counted back from today, 0 = today) that saw a partial outage.
const PARTIAL_OUTAGE_DAYS: &[usize] = &[19, 48];

/// One flag per day for the uptime bar, oldest first. `true` means fully up.
pub fn uptime_history() -> Vec<bool> {
    (0..UPTIME_DAYS)
        .map(|i| !PARTIAL_OUTAGE_DAYS.contains(&(UPTIME_DAYS - 1 - i)))
        .collect()
}

pub struct DocSection {
    pub title: &'static str,
    pub blurb: &'static str,
    pub articles: &'static [&'static str],
}

pub const DOC_SECTIONS: &[DocSection] = &[
    DocSection {
        title: "Getting Started",
        blurb: "Learn the basics and create your first image",
        articles: &["Quick Start Guide", "Your First Generation", "Understanding Prompts", "Best Practices"],
    },
    DocSection {
        title: "API Reference",
        blurb: "Integrate MATTR into your applications",
        articles: &["Authentication", "Generate Images", "List Models", "Webhooks", "Rate Limits"],
    },
    DocSection {
        title: "Styles & Models",
        blurb: "Explore different artistic styles",
        articles: &["Available Models", "Style Transfer", "Custom Training", "Model Comparison"],
    },
    DocSection {
        title: "Advanced",
        blurb: "Fine-tune your generations",
        articles: &["Parameters Guide", "Batch Processing", "Image-to-Image", "Inpainting", "Upscaling"],
    },
];

/// `(title, section, minutes to read)`
pub const POPULAR_ARTICLES: &[(&str, &str, u32)] = &[
    ("How to Write Better Prompts", "Getting Started", 5),
    ("API Authentication Guide", "API Reference", 3),
    ("Understanding CFG Scale", "Advanced", 7),
    ("Style Mixing Tutorial", "Styles & Models", 10),
];

/// Sections with the articles whose title contains `query`. Sections with
/// no match are left out; a blank query keeps everything.
pub fn search_docs(query: &str) -> Vec<(&'static DocSection, Vec<&'static str>)> {
    let query = query.trim().to_lowercase();
    DOC_SECTIONS
        .iter()
        .map(|section| {
            let hits = section
                .articles
                .iter()
                .copied()
                .filter(|article| article.to_lowercase().contains(&query))
                .collect::<Vec<_>>();
            (section, hits)
        })
        .filter(|(_, hits)| !hits.is_empty())
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorialFormat {
    Video,
    Article,
}

pub struct Tutorial {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub minutes: u32,
    pub format: TutorialFormat,
    pub level: &'static str,
    pub views: u32,
}

impl Tutorial {
    pub fn summary(&self) -> String {
        let format = match self.format {
            TutorialFormat::Video => "Video",
            TutorialFormat::Article => "Article",
        };
        format!("{} · {} min · {} · {} views", format, self.minutes, self.level, compact_count(self.views))
    }
}

pub const TUTORIAL_CATEGORIES: &[&str] = &[ALL, "Getting Started", "Advanced", "API", "Workflows", "Tips & Tricks"];

pub const FEATURED_TUTORIAL: Tutorial = Tutorial {
    title: "Master AI Image Generation",
    description: "A complete walkthrough from first prompt to finished campaign",
    category: "Getting Started",
    minutes: 32,
    format: TutorialFormat::Video,
    level: "Beginner",
    views: 45_200,
};

pub const TUTORIALS: &[Tutorial] = &[
    Tutorial { title: "Crafting the Perfect Prompt", description: "Learn the art of writing effective prompts", category: "Getting Started", minutes: 12, format: TutorialFormat::Video, level: "Beginner", views: 28_400 },
    Tutorial { title: "Style Transfer Deep Dive", description: "Apply any artistic style to your images", category: "Advanced", minutes: 18, format: TutorialFormat::Video, level: "Intermediate", views: 15_700 },
    Tutorial { title: "API Integration Guide", description: "Build MATTR into your own applications", category: "API", minutes: 25, format: TutorialFormat::Article, level: "Advanced", views: 12_300 },
    Tutorial { title: "Batch Processing Workflows", description: "Generate hundreds of variations at once", category: "Workflows", minutes: 15, format: TutorialFormat::Video, level: "Intermediate", views: 9_800 },
    Tutorial { title: "Consistency in Character Design", description: "Create consistent characters across images", category: "Advanced", minutes: 22, format: TutorialFormat::Video, level: "Advanced", views: 21_500 },
    Tutorial { title: "Negative Prompts Explained", description: "What to avoid and how to use negative prompts", category: "Tips & Tricks", minutes: 8, format: TutorialFormat::Article, level: "Beginner", views: 34_100 },
    Tutorial { title: "Inpainting Mastery", description: "Edit specific areas of your images seamlessly", category: "Advanced", minutes: 20, format: TutorialFormat::Video, level: "Intermediate", views: 18_900 },
    Tutorial { title: "Setting Up Webhooks", description: "Get notified when generations complete", category: "API", minutes: 10, format: TutorialFormat::Article, level: "Advanced", views: 6_200 },
];

pub struct LearningPath {
    pub title: &'static str,
    pub description: &'static str,
    pub lessons: u32,
    pub hours: u32,
    pub color: &'static str,
}

pub const LEARNING_PATHS: &[LearningPath] = &[
    LearningPath { title: "Creative Fundamentals", description: "Master the basics of AI generation", lessons: 8, hours: 2, color: "#f59e0b" },
    LearningPath { title: "Developer Track", description: "Build apps with the MATTR API", lessons: 12, hours: 4, color: "#3b82f6" },
    LearningPath { title: "Advanced Techniques", description: "Take your creations to the next level", lessons: 10, hours: 3, color: "#8b5cf6" },
];

/// Category match and case-insensitive title search, both required.
pub fn filter_tutorials(category: &str, query: &str) -> Vec<&'static Tutorial> {
    let query = query.trim().to_lowercase();
    TUTORIALS
        .iter()
        .filter(|t| category == ALL || t.category == category)
        .filter(|t| t.title.to_lowercase().contains(&query))
        .collect()
}

/// View counts as shown on cards, e.g. 28400 -> "28.4K".
pub fn compact_count(n: u32) -> String {
    let (value, unit) = match n {
        0..=999 => return n.to_string(),
        1_000..=999_999 => (n as f64 / 1_000.0, "K"),
        _ => (n as f64 / 1_000_000.0, "M"),
    };
    let rounded = format!("{:.1}", value);
    format!("{}{}", rounded.strip_suffix(".0").unwrap_or(&rounded), unit)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationStatus {
    Available,
    Beta,
    ComingSoon,
}

impl IntegrationStatus {
    pub fn label(self) -> &'static str {
        match self {
            IntegrationStatus::Available => "Available",
            IntegrationStatus::Beta => "Beta",
            IntegrationStatus::ComingSoon => "Coming Soon",
        }
    }
}

pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub status: IntegrationStatus,
    pub popular: bool,
}

pub const INTEGRATION_CATEGORIES: &[&str] = &[ALL, "Design", "Development", "Productivity", "E-commerce", "Social"];

pub const INTEGRATIONS: &[Integration] = &[
    Integration { name: "Figma", description: "Generate images directly in your designs", category: "Design", status: IntegrationStatus::Available, popular: true },
    Integration { name: "Adobe Suite", description: "Seamless integration with Photoshop & more", category: "Design", status: IntegrationStatus::Available, popular: true },
    Integration { name: "Notion", description: "Embed AI images in your workspace", category: "Productivity", status: IntegrationStatus::Available, popular: false },
    Integration { name: "Slack", description: "Generate images with slash commands", category: "Productivity", status: IntegrationStatus::Available, popular: true },
    Integration { name: "Shopify", description: "Auto-generate product images", category: "E-commerce", status: IntegrationStatus::Available, popular: true },
    Integration { name: "WordPress", description: "AI image generation plugin", category: "Development", status: IntegrationStatus::Available, popular: false },
    Integration { name: "Zapier", description: "Connect to 5000+ apps", category: "Productivity", status: IntegrationStatus::Available, popular: true },
    Integration { name: "Discord", description: "Generate images in your server", category: "Social", status: IntegrationStatus::Available, popular: true },
    Integration { name: "VS Code", description: "Generate images while coding", category: "Development", status: IntegrationStatus::Beta, popular: false },
    Integration { name: "Webflow", description: "AI images for your projects", category: "Design", status: IntegrationStatus::Available, popular: false },
    Integration { name: "Canva", description: "Add AI elements to designs", category: "Design", status: IntegrationStatus::ComingSoon, popular: false },
    Integration { name: "Mailchimp", description: "AI images for email campaigns", category: "Productivity", status: IntegrationStatus::ComingSoon, popular: false },
];

pub const INTEGRATION_FEATURES: &[(&str, &str)] = &[
    ("Easy Setup", "Connect in minutes with guided installation"),
    ("Real-time Sync", "Changes sync instantly across platforms"),
    ("Custom Webhooks", "Build your own with our webhook system"),
    ("Full API Access", "Complete API for custom integrations"),
];

/// Category match and case-insensitive name search, both required.
pub fn filter_integrations(category: &str, query: &str) -> Vec<&'static Integration> {
    let query = query.trim().to_lowercase();
    INTEGRATIONS
        .iter()
        .filter(|i| category == ALL || i.category == category)
        .filter(|i| i.name.to_lowercase().contains(&query))
        .collect()
}

pub const ENTERPRISE_FEATURES: &[(&str, &str)] = &[
    ("Enterprise Security", "SOC 2 Type II certified with SSO, SAML, and advanced access controls."),
    ("Dedicated Infrastructure", "Private cloud deployment options with guaranteed uptime SLAs."),
    ("Team Management", "Centralized billing, usage analytics, and granular permissions."),
    ("Data Privacy", "Your data stays yours. We never train on enterprise generations."),
    ("Advanced Analytics", "Detailed insights into usage patterns, costs, and performance."),
    ("Priority Support", "Dedicated account manager and 24/7 technical support."),
];

pub const ENTERPRISE_LOGOS: &[&str] = &["Spotify", "Airbnb", "Netflix", "Stripe", "Notion", "Figma", "Slack", "Adobe"];

pub const ENTERPRISE_QUOTES: &[Testimonial] = &[
    Testimonial { quote: "MATTR has transformed how our design team works. We've cut asset creation time by 80%.", name: "Sarah Chen", role: "VP of Design, Notion" },
    Testimonial { quote: "The enterprise features and security controls made MATTR an easy choice for our organization.", name: "Michael Ross", role: "CTO, Scale AI" },
];

pub struct PressRelease {
    pub published: (i32, u32, u32),
    pub title: &'static str,
    pub source: &'static str,
}

pub const PRESS_RELEASES: &[PressRelease] = &[
    PressRelease { published: (2024, 12, 15), title: "MATTR Launches 3.0 with Revolutionary AI Image Quality", source: "Company Announcement" },
    PressRelease { published: (2024, 11, 15), title: "MATTR Raises $50M Series B Led by Sequoia Capital", source: "TechCrunch" },
    PressRelease { published: (2024, 10, 1), title: "MATTR Partners with Adobe for Creative Cloud Integration", source: "The Verge" },
    PressRelease { published: (2024, 8, 20), title: "MATTR Reaches 10 Million Users Milestone", source: "Company Announcement" },
];

/// `(outlet, monogram)`
pub const PRESS_COVERAGE: &[(&str, &str)] = &[
    ("TechCrunch", "TC"),
    ("The Verge", "V"),
    ("Wired", "W"),
    ("Forbes", "F"),
    ("Bloomberg", "B"),
    ("Fast Company", "FC"),
];

/// `(name, format, size in MB)`
pub const PRESS_ASSETS: &[(&str, &str, f64)] = &[
    ("Logo Pack", "ZIP", 2.4),
    ("Brand Guidelines", "PDF", 8.1),
    ("Product Screenshots", "ZIP", 15.2),
    ("Executive Photos", "ZIP", 12.8),
];

pub const PRESS_EMAIL: &str = "press@mattr.ai";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_respect_all() {
        assert_eq!(posts_in(ALL).len(), POSTS.len());
        assert_eq!(posts_in("Company").len(), 2);
        assert!(posts_in("Nope").is_empty());
        assert_eq!(openings_in("Design").len(), 2);
        assert_eq!(openings_in(ALL).len(), OPENINGS.len());
    }

    #[test]
    fn gallery_search_is_case_insensitive() {
        let hits = filter_gallery(ALL, "  OMAR ");
        assert_eq!(hits.len(), 2);
        assert_eq!(filter_gallery("Sci-Fi", "orbital").len(), 1);
        assert!(filter_gallery("Portraits", "orbital").is_empty());
    }

    #[test]
    fn post_labels() {
        assert_eq!(POSTS[0].date_label(), "Dec 15, 2024");
        assert_eq!(POSTS[2].date_label(), "Dec 5, 2024");
        assert_eq!(POSTS[5].slug(), "our-series-b-what-s-next-for-mattr");
    }

    #[test]
    fn uptime_history_is_oldest_first() {
        let days = uptime_history();
        assert_eq!(days.len(), UPTIME_DAYS);
        assert_eq!(days.iter().filter(|up| !**up).count(), PARTIAL_OUTAGE_DAYS.len());
        assert!(!days[UPTIME_DAYS - 1 - 19]);
        assert!(days[UPTIME_DAYS - 1]);
    }

    #[test]
    fn release_dates_are_long_form() {
        assert_eq!(long_date(RELEASES[0].published), "December 15, 2024");
        assert_eq!(long_date((2024, 2, 30)), "");
    }

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert!(PLANS.iter().all(|p| p.price(true) <= p.price(false)));
    }

    #[test]
    fn docs_search_keeps_only_matching_sections() {
        assert_eq!(search_docs("").len(), DOC_SECTIONS.len());
        let hits = search_docs("  WEBHOOK ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.title, "API Reference");
        assert_eq!(hits[0].1, vec!["Webhooks"]);
        assert_eq!(search_docs("model").iter().map(|(_, a)| a.len()).sum::<usize>(), 3);
        assert!(search_docs("quantum").is_empty());
    }

    #[test]
    fn tutorials_filter_on_category_and_title() {
        assert_eq!(filter_tutorials(ALL, "").len(), TUTORIALS.len());
        assert_eq!(filter_tutorials("Advanced", "").len(), 3);
        assert_eq!(filter_tutorials("API", "webhooks").len(), 1);
        assert!(filter_tutorials("Workflows", "webhooks").is_empty());
        assert_eq!(filter_tutorials(ALL, "PROMPT").len(), 2);
    }

    #[test]
    fn view_counts_are_compact() {
        assert_eq!(compact_count(999), "999");
        assert_eq!(compact_count(28_400), "28.4K");
        assert_eq!(compact_count(6_000), "6K");
        assert_eq!(compact_count(2_500_000), "2.5M");
        assert_eq!(TUTORIALS[0].summary(), "Video · 12 min · Beginner · 28.4K views");
    }

    #[test]
    fn integrations_filter_on_category_and_name() {
        assert_eq!(filter_integrations(ALL, "").len(), INTEGRATIONS.len());
        assert_eq!(filter_integrations("Design", "").len(), 4);
        assert_eq!(filter_integrations(ALL, "code")[0].status, IntegrationStatus::Beta);
        assert!(filter_integrations("Social", "slack").is_empty());
        let coming = INTEGRATIONS.iter().filter(|i| i.status == IntegrationStatus::ComingSoon);
        assert!(coming.clone().all(|i| !i.popular));
        assert_eq!(coming.count(), 2);
    }

    #[test]
    fn press_releases_are_newest_first() {
        assert!(PRESS_RELEASES.windows(2).all(|w| w[0].published > w[1].published));
        assert_eq!(long_date(PRESS_RELEASES[2].published), "October 1, 2024");
    }
}

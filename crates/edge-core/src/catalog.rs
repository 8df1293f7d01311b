//! The route config catalog.
//!
//! One entry per page family, ordered so that related entries read
//! together. Order matters within a matcher kind: the resolver scans the
//! table top to bottom per pass. The universal fallback is always the last
//! entry.

use crate::actions::{ActionTarget, QuickAction};
use crate::routing::{PathMatcher, RouteConfig};
use crate::types::Role;
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Global navigation
// ---------------------------------------------------------------------------

/// Prepended to every filtered action set so the widget can always go home
/// or back.
pub const CORE_NAVIGATION_ACTIONS: [QuickAction; 2] = [
    QuickAction {
        label: "Main Menu",
        target: ActionTarget::Internal("/"),
        icon: "🏠",
        requires_auth: false,
        allowed_roles: &[],
        always_show: true,
    },
    QuickAction {
        label: "Back",
        target: ActionTarget::Back,
        icon: "◀️",
        requires_auth: false,
        allowed_roles: &[],
        always_show: true,
    },
];

// ---------------------------------------------------------------------------
// Role groups
// ---------------------------------------------------------------------------

const TEACHING_ROLES: &[Role] = &[Role::Guru, Role::HeroGuru];
const ANGEL_ROLES: &[Role] = &[Role::Angel];
const ADMIN_ROLES: &[Role] = &[Role::Admin];

// ---------------------------------------------------------------------------
// Table access
// ---------------------------------------------------------------------------

static ROUTE_CONFIGS: OnceLock<Vec<RouteConfig>> = OnceLock::new();

pub fn route_configs() -> &'static [RouteConfig] {
    ROUTE_CONFIGS.get_or_init(build_table).as_slice()
}

/// The terminal catch-all entry.
pub fn fallback_config() -> &'static RouteConfig {
    route_configs()
        .last()
        .expect("catalog always ends with the universal fallback")
}

// ---------------------------------------------------------------------------
// Entry constructors
// ---------------------------------------------------------------------------

fn act(label: &'static str, route: &'static str, icon: &'static str) -> QuickAction {
    QuickAction {
        label,
        target: ActionTarget::from_route(route),
        icon,
        requires_auth: false,
        allowed_roles: &[],
        always_show: false,
    }
}

fn auth(label: &'static str, route: &'static str, icon: &'static str) -> QuickAction {
    QuickAction {
        requires_auth: true,
        ..act(label, route, icon)
    }
}

fn role_gated(
    label: &'static str,
    route: &'static str,
    icon: &'static str,
    roles: &'static [Role],
) -> QuickAction {
    QuickAction {
        requires_auth: true,
        allowed_roles: roles,
        ..act(label, route, icon)
    }
}

fn literal(
    name: &'static str,
    path: &'static str,
    quick_actions: Vec<QuickAction>,
    system_prompt: &'static str,
) -> RouteConfig {
    RouteConfig {
        name,
        matcher: PathMatcher::Literal(path),
        quick_actions,
        system_prompt,
    }
}

fn pattern(
    name: &'static str,
    re: &str,
    quick_actions: Vec<QuickAction>,
    system_prompt: &'static str,
) -> RouteConfig {
    RouteConfig {
        name,
        matcher: PathMatcher::Pattern(Regex::new(re).unwrap()),
        quick_actions,
        system_prompt,
    }
}

fn predicate(
    name: &'static str,
    test: fn(&str) -> bool,
    quick_actions: Vec<QuickAction>,
    system_prompt: &'static str,
) -> RouteConfig {
    RouteConfig {
        name,
        matcher: PathMatcher::Predicate(test),
        quick_actions,
        system_prompt,
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// The jobs index, with or without query filters.
fn is_jobs_index(path: &str) -> bool {
    path == "/jobs" || path.starts_with("/jobs?")
}

fn is_onboarding_flow(path: &str) -> bool {
    path.starts_with("/onboarding")
}

fn is_public_profile(path: &str) -> bool {
    path.starts_with("/profiles/")
}

fn is_attestation_form(path: &str) -> bool {
    path.starts_with("/attestation/")
}

fn is_dispute_flow(path: &str) -> bool {
    path.starts_with("/disputes")
}

fn is_compliance_flow(path: &str) -> bool {
    path.starts_with("/compliance")
}

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

fn build_table() -> Vec<RouteConfig> {
    vec![
        // ------------------------------------------------------------------
        // Main site
        // ------------------------------------------------------------------
        literal(
            "home",
            "/",
            vec![
                act("Create Account", "/signup", "✨"),
                act("Login", "/login", "🔐"),
                act("Browse Gurus", "/browse", "🔍"),
                act("How It Works", "/how-it-works", "💡"),
                act("Explore by Topic", "/hubs", "🌐"),
            ],
            "You are the YooHoo.Guru Welcome Assistant. Map new visitors to the \
             right surface: paid skill sessions (Coach), local services (Angel's \
             List), free accessible learning (Hero Gurus), or the topic hubs. Be \
             welcoming and direct them down the right path.",
        ),
        literal(
            "dashboard",
            "/dashboard",
            vec![
                auth("Find Skills", "/browse", "🎯"),
                auth("My Profile", "/profile", "👤"),
                auth("Settings", "/settings", "⚙️"),
                auth("AI Match", "/ai/matchmaking", "🤖"),
            ],
            "You are the Dashboard Assistant. Help users find and book sessions, \
             update their profile, and understand dashboard features. Reference \
             their role and suggest relevant next steps.",
        ),
        pattern(
            "guru-profile",
            r"^/guru/profile",
            vec![
                role_gated("Update Profile", "/guru/profile", "📝", TEACHING_ROLES),
                role_gated("My Sessions", "/guru/sessions", "📅", TEACHING_ROLES),
                role_gated("Earnings", "/guru/earnings", "💰", TEACHING_ROLES),
                role_gated("My Ratings", "/guru/ratings", "⭐", TEACHING_ROLES),
            ],
            "You are a Guru Success Coach. Help teachers optimize their profile, \
             attract more students, manage sessions, and price their offerings. \
             Be supportive and business-focused.",
        ),
        pattern(
            "angel",
            r"^/angel",
            vec![
                role_gated("My Services", "/angel/listings", "🛠️", ANGEL_ROLES),
                role_gated("Service Requests", "/angel/requests", "📋", ANGEL_ROLES),
                role_gated("Earnings", "/angel/earnings", "💰", ANGEL_ROLES),
                role_gated("Profile", "/angel/profile", "👤", ANGEL_ROLES),
            ],
            "You are a Service Provider Success Coach. Help Angels optimize \
             listings, price local services, manage requests, and build trust \
             through reviews. Be practical and community-focused.",
        ),
        pattern(
            "heroes",
            r"^/heroes",
            vec![
                act("Free Courses", "/heroes/courses", "❤️"),
                act("Volunteer Teaching", "/heroes/volunteer", "🦸"),
                act("Accessibility Help", "/heroes/accessibility", "♿"),
                act("Community Impact", "/heroes/impact", "🏆"),
            ],
            "You are a Hero Gurus Accessibility Advocate. All learning here is \
             free; emphasize adaptive teaching, disability accommodations, and \
             volunteer Hero teachers. Be compassionate and accessibility-first.",
        ),
        // ------------------------------------------------------------------
        // Marketplace
        // ------------------------------------------------------------------
        literal(
            "job-posting",
            "/jobs/post",
            vec![
                auth("View My Jobs", "/jobs/my-listings", "📋"),
                act("Browse Talent", "/browse", "👥"),
                act("Pricing Guide", "/pricing", "💡"),
                auth("AI Price Helper", "/ai/price-recommendation", "🤖"),
            ],
            "You are a Hiring Consultant for the marketplace. Help users write \
             clear job postings, set competitive prices, and pick required \
             skills. Ask clarifying questions and be specific.",
        ),
        predicate(
            "job-browsing",
            is_jobs_index,
            vec![
                auth("Post a Job", "/jobs/post", "✍️"),
                auth("My Applications", "/jobs/my-applications", "📨"),
                auth("Saved Jobs", "/jobs/saved", "🔖"),
                act("Browse Gurus", "/browse", "🔍"),
            ],
            "You are a Job Search Assistant. Help users filter opportunities, \
             understand requirements, and write strong applications. Be \
             proactive in suggesting relevant jobs.",
        ),
        literal(
            "browse",
            "/browse",
            vec![
                act("AI Match", "/ai/matchmaking", "🤖"),
                act("Learning Style Quiz", "/ai/learning-style-assessment", "📊"),
                act("Book Session", "/browse?action=book", "📅"),
                act("View Categories", "/skills", "🎯"),
            ],
            "You are a Learning Matchmaking Expert. Recommend gurus based on \
             goals, style, and budget, explain specialties, and advise on \
             booking a first session.",
        ),
        literal(
            "skills",
            "/skills",
            vec![
                act("Browse Gurus", "/browse", "👥"),
                act("Content Hubs", "/hubs", "🌐"),
                act("AI Match", "/ai/matchmaking", "🤖"),
                act("Popular Skills", "/skills?sort=popular", "⭐"),
            ],
            "You are a Skill Discovery Guide. Explain skill categories, suggest \
             skills for the user's goals, and connect them to available gurus. \
             Inspire curiosity.",
        ),
        literal(
            "ai-matchmaking",
            "/ai/matchmaking",
            vec![
                act("Take Quiz", "/ai/learning-style-assessment", "📋"),
                act("Browse All", "/browse", "👥"),
                auth("My Matches", "/ai/matchmaking?view=matches", "💫"),
                auth("Dashboard", "/dashboard", "🏠"),
            ],
            "You are an AI Learning Matchmaker. Guide users through the learning \
             style assessment, interpret results, and recommend top matches. Be \
             data-driven but warm.",
        ),
        // ------------------------------------------------------------------
        // Learning
        // ------------------------------------------------------------------
        literal(
            "learning-schedule",
            "/learning/schedule",
            vec![
                auth("Book Session", "/browse", "📅"),
                auth("My Progress", "/learning/progress", "📊"),
                auth("Upcoming Classes", "/learning/schedule?filter=upcoming", "⏰"),
                auth("Past Sessions", "/learning/schedule?filter=past", "🕒"),
            ],
            "You are a Learning Schedule Manager. Help students organize \
             sessions, resolve conflicts, and stay on track with reminders and \
             rescheduling.",
        ),
        literal(
            "profile",
            "/profile",
            vec![
                auth("Edit Profile", "/profile?edit=true", "✏️"),
                auth("AI Profile Help", "/ai/profile-assistant", "🤖"),
                auth("Privacy Settings", "/settings?tab=privacy", "🔒"),
                auth("Dashboard", "/dashboard", "🏠"),
            ],
            "You are a Profile Optimization Specialist. Give specific, \
             actionable feedback on bios, skills, photos, and visibility \
             settings.",
        ),
        literal(
            "settings",
            "/settings",
            vec![
                auth("Account", "/settings?tab=account", "👤"),
                auth("Privacy", "/settings?tab=privacy", "🔒"),
                auth("Notifications", "/settings?tab=notifications", "🔔"),
                auth("Billing", "/settings?tab=billing", "💳"),
            ],
            "You are a Settings and Account Assistant. Help with privacy, \
             notifications, billing, and account security. Be clear about \
             privacy implications.",
        ),
        // ------------------------------------------------------------------
        // Admin
        // ------------------------------------------------------------------
        pattern(
            "admin",
            r"^/admin",
            vec![
                role_gated("Analytics", "/admin/analytics", "📊", ADMIN_ROLES),
                role_gated("Users", "/admin/users", "👥", ADMIN_ROLES),
                role_gated("Content", "/admin/content", "📋", ADMIN_ROLES),
                role_gated("Settings", "/admin/settings", "⚙️", ADMIN_ROLES),
            ],
            "You are an Admin Platform Assistant. Help administrators with \
             analytics, user management, content moderation, and platform \
             configuration. Prioritize platform health and user safety.",
        ),
        // ------------------------------------------------------------------
        // Hub pages (under the apps tree)
        // ------------------------------------------------------------------
        pattern(
            "hub-home",
            r"^/_apps/[^/]+$",
            vec![
                act("Find Teachers", "/browse", "👨‍🏫"),
                act("Latest Articles", "/blog", "📰"),
                act("Skills", "/skills", "🎯"),
                act("Contact", "/contact", "✉️"),
            ],
            "You are a Content Hub Guide. Explain this topic area, recommend \
             relevant gurus and articles, and connect learners with teachers in \
             the specialty.",
        ),
        // ------------------------------------------------------------------
        // Accounts and info pages
        // ------------------------------------------------------------------
        literal(
            "signup",
            "/signup",
            vec![
                act("Learn More", "/how-it-works", "💡"),
                act("Login Instead", "/login", "🔐"),
                act("Browse First", "/browse", "🔍"),
                act("Pricing Info", "/pricing", "💰"),
            ],
            "You are an Onboarding Specialist. Explain account types, the signup \
             process, and first steps after joining. Be welcoming and address \
             common concerns.",
        ),
        literal(
            "login",
            "/login",
            vec![
                act("Create Account", "/signup", "✨"),
                act("Browse Gurus", "/browse", "🔍"),
                act("How It Works", "/how-it-works", "💡"),
                act("Need Help?", "/help", "❓"),
            ],
            "You are a Login Support Assistant. Help with login \
             troubleshooting, password resets, and account recovery. Be helpful \
             and security-conscious.",
        ),
        literal(
            "how-it-works",
            "/how-it-works",
            vec![
                act("Create Account", "/signup", "✨"),
                act("Browse Gurus", "/browse", "🔍"),
                act("Pricing", "/pricing", "💰"),
                act("Contact", "/contact", "✉️"),
            ],
            "You are the YooHoo.Guru Platform Guide. Explain how the platform \
             works: skill-sharing (Coach), local services (Angel's List), and \
             free accessible learning (Hero Gurus). Suggest the best path for \
             the user's goal.",
        ),
        literal(
            "pricing",
            "/pricing",
            vec![
                act("Get Started", "/signup", "✨"),
                act("SkillShare", "https://coach.yoohoo.guru", "🏆"),
                act("Angel's List", "https://angel.yoohoo.guru", "😇"),
                act("Hero Gurus", "https://heroes.yoohoo.guru", "🦸"),
            ],
            "You are a Pricing and Plans Advisor. Explain session fees, platform \
             commission, Guru Pass, Angel's List rates, and that Hero Gurus is \
             free. Direct users to the right product for their needs.",
        ),
        literal(
            "about",
            "/about",
            vec![
                act("How It Works", "/how-it-works", "💡"),
                act("Contact", "/contact", "✉️"),
                act("Sign Up", "/signup", "✨"),
                act("Home", "/", "🏠"),
            ],
            "You are the YooHoo.Guru Mission Ambassador. Share the platform's \
             mission, values, and community, and encourage visitors to try it.",
        ),
        literal(
            "contact",
            "/contact",
            vec![
                act("Help Center", "/help", "❓"),
                act("FAQ", "/faq", "📋"),
                act("Home", "/", "🏠"),
                auth("Dashboard", "/dashboard", "📊"),
            ],
            "You are a Contact and Support Assistant. Help with form submission \
             and expected response times; for urgent issues point to help or \
             the FAQ first.",
        ),
        literal(
            "help",
            "/help",
            vec![
                act("FAQ", "/faq", "📋"),
                act("Contact", "/contact", "✉️"),
                act("How It Works", "/how-it-works", "💡"),
                auth("Dashboard", "/dashboard", "🏠"),
            ],
            "You are a Help Center Assistant. Help users find answers, \
             troubleshoot issues, and decide when to contact support.",
        ),
        literal(
            "faq",
            "/faq",
            vec![
                act("Contact", "/contact", "✉️"),
                act("Help", "/help", "❓"),
                act("Browse", "/browse", "🔍"),
                act("Sign Up", "/signup", "✨"),
            ],
            "You are an FAQ Assistant. Answer common questions about accounts, \
             booking, payments, safety, and platform use. Point to contact or \
             help for anything not covered.",
        ),
        // ------------------------------------------------------------------
        // Legal and trust
        // ------------------------------------------------------------------
        pattern(
            "legal",
            r"^/(privacy|terms|safety|cookies)$",
            vec![
                act("Home", "/", "🏠"),
                act("Contact", "/contact", "✉️"),
                act("Help", "/help", "❓"),
            ],
            "You are a Trust and Legal Information Assistant. Answer questions \
             about the privacy, terms, safety, or cookies page the user is \
             reading. Direct specific requests to contact.",
        ),
        predicate(
            "onboarding",
            is_onboarding_flow,
            vec![
                auth("Dashboard", "/dashboard", "🏠"),
                auth("Skip to Browse", "/browse", "🔍"),
                act("Help", "/help", "❓"),
            ],
            "You are an Onboarding Coach. Guide the user through the current \
             step: profile, categories, requirements, documents, or payout. \
             Explain what's next and encourage completion.",
        ),
        literal(
            "hubs",
            "/hubs",
            vec![
                act("Skills", "/skills", "🎯"),
                act("Browse Gurus", "/browse", "👥"),
                act("AI Match", "/ai/matchmaking", "🤖"),
                act("Home", "/", "🏠"),
            ],
            "You are a Content Hubs Guide. Explain the topic hubs and help \
             users pick one to explore content and find teachers.",
        ),
        pattern(
            "skill-subject",
            r"^/skills/[^/]+",
            vec![
                act("Browse Gurus", "/browse", "👥"),
                act("AI Match", "/ai/matchmaking", "🤖"),
                act("All Skills", "/skills", "🎯"),
                act("Hubs", "/hubs", "🌐"),
            ],
            "You are a Skill Category Guide. Help users exploring this skill \
             find gurus who teach it, or browse related skills and hubs.",
        ),
        predicate(
            "public-profile",
            is_public_profile,
            vec![
                act("Book Session", "/browse", "📅"),
                act("See Ratings", "#ratings", "⭐"),
                act("Back to Browse", "/browse", "🔍"),
                auth("Dashboard", "/dashboard", "🏠"),
            ],
            "You are a Guru Profile Assistant. The user is viewing a guru's \
             public profile. Suggest booking a session, checking ratings, or \
             browsing other gurus.",
        ),
        // ------------------------------------------------------------------
        // Sessions
        // ------------------------------------------------------------------
        pattern(
            "book-session",
            r"^/guru/[^/]+/book-session$",
            vec![
                auth("My Schedule", "/learning/schedule", "📅"),
                auth("Dashboard", "/dashboard", "🏠"),
                act("Help", "/help", "❓"),
            ],
            "You are a Session Booking Assistant. Guide the user through \
             choosing a time, confirming, and paying, and explain what happens \
             after booking.",
        ),
        pattern(
            "guru-ratings",
            r"^/guru/[^/]+/ratings$",
            vec![
                act("Book Session", "/browse", "📅"),
                act("Back to Profile", "/browse", "👤"),
                act("Browse", "/browse", "🔍"),
            ],
            "You are a Ratings Assistant. Help the user understand this guru's \
             ratings and reviews, then suggest booking or browsing.",
        ),
        pattern(
            "session-video",
            r"^/session/[^/]+/video$",
            vec![
                auth("My Schedule", "/learning/schedule", "📅"),
                auth("Dashboard", "/dashboard", "🏠"),
                act("Help", "/help", "❓"),
            ],
            "You are an In-Session Video Assistant. Help with joining the call \
             and camera or microphone issues. Keep guidance brief so the user \
             can focus on the session.",
        ),
        literal(
            "learning-progress",
            "/learning/progress",
            vec![
                auth("My Schedule", "/learning/schedule", "📅"),
                auth("Book Next", "/browse", "📅"),
                auth("Dashboard", "/dashboard", "🏠"),
            ],
            "You are a Learning Progress Coach. Help users understand completed \
             and ongoing learning, and encourage booking the next session.",
        ),
        literal(
            "location-search",
            "/location/search",
            vec![
                act("Browse All", "/browse", "👥"),
                act("Home", "/", "🏠"),
                act("Skills", "/skills", "🎯"),
            ],
            "You are a Map and Location Assistant. Help users find experts and \
             gigs nearby: refine filters, read map results, and jump to a \
             profile.",
        ),
        // ------------------------------------------------------------------
        // Blogs
        // ------------------------------------------------------------------
        pattern(
            "hub-blog",
            r"^/_apps/[^/]+/blog$",
            vec![
                act("Find Teachers", "/browse", "👨‍🏫"),
                act("Skills", "/skills", "🎯"),
                act("Contact", "/contact", "✉️"),
                act("Back to Hub", "/hubs", "🌐"),
            ],
            "You are a Blog List Assistant for this topic hub. Help users find \
             interesting posts and connect with teachers in the subject.",
        ),
        pattern(
            "hub-blog-post",
            r"^/_apps/[^/]+/blog/[^/]+",
            vec![
                act("More Articles", "/blog", "📰"),
                act("Book a Guru", "/browse", "📅"),
                act("Contact", "/contact", "✉️"),
            ],
            "You are a Blog Post Assistant. The user is reading an article. \
             Suggest related content or booking a guru in this topic.",
        ),
        literal(
            "blog",
            "/blog",
            vec![
                act("Content Hubs", "/hubs", "🌐"),
                act("Browse Gurus", "/browse", "👥"),
                act("Contact", "/contact", "✉️"),
            ],
            "You are the Main Blog Assistant. Help users discover posts and \
             connect to topic hubs or gurus.",
        ),
        pattern(
            "blog-post",
            r"^/blog/[^/]+",
            vec![
                act("All Posts", "/blog", "📰"),
                act("Browse", "/browse", "🔍"),
                act("Hubs", "/hubs", "🌐"),
            ],
            "You are a Blog Post Assistant. Suggest related posts, browsing \
             gurus, or exploring hubs.",
        ),
        // ------------------------------------------------------------------
        // AI assistants
        // ------------------------------------------------------------------
        literal(
            "learning-style-assessment",
            "/ai/learning-style-assessment",
            vec![
                act("See Matches", "/ai/matchmaking", "💫"),
                act("Browse Gurus", "/browse", "👥"),
                auth("Dashboard", "/dashboard", "🏠"),
            ],
            "You are a Learning Style Assessment Guide. Explain the quiz, \
             encourage completion, and point users to their matches afterwards.",
        ),
        literal(
            "profile-assistant",
            "/ai/profile-assistant",
            vec![
                auth("My Profile", "/profile", "👤"),
                auth("Dashboard", "/dashboard", "🏠"),
                auth("Settings", "/settings", "⚙️"),
            ],
            "You are an AI Profile Assistant. Help users improve their bio, \
             skills, and photo with specific, actionable feedback.",
        ),
        literal(
            "price-recommendation",
            "/ai/price-recommendation",
            vec![
                auth("Post Job", "/jobs/post", "✍️"),
                act("Jobs List", "/jobs", "📋"),
                act("Pricing", "/pricing", "💰"),
            ],
            "You are an AI Price Recommendation Assistant. Help users set \
             competitive prices for job postings or services.",
        ),
        // ------------------------------------------------------------------
        // Trust flows
        // ------------------------------------------------------------------
        predicate(
            "attestation",
            is_attestation_form,
            vec![
                act("Hero Gurus", "https://heroes.yoohoo.guru", "🦸"),
                auth("Dashboard", "/dashboard", "🏠"),
                act("Help", "/help", "❓"),
            ],
            "You are an Attestation Assistant. Guide users through the \
             attestation form, explain why we ask, and what happens next.",
        ),
        predicate(
            "disputes",
            is_dispute_flow,
            vec![
                act("Help", "/help", "❓"),
                act("Contact", "/contact", "✉️"),
                auth("Dashboard", "/dashboard", "🏠"),
            ],
            "You are a Dispute Resolution Assistant. Explain how to submit or \
             resolve a dispute and when to escalate. Be calm and procedural.",
        ),
        predicate(
            "compliance",
            is_compliance_flow,
            vec![
                auth("Dashboard", "/dashboard", "🏠"),
                act("Help", "/help", "❓"),
            ],
            "You are a Compliance Assistant. Help users complete required \
             documents and attestations.",
        ),
        // ------------------------------------------------------------------
        // Fallback
        // ------------------------------------------------------------------
        RouteConfig {
            name: "fallback",
            matcher: PathMatcher::Any,
            quick_actions: vec![
                act("Home", "/", "🏠"),
                auth("Dashboard", "/dashboard", "📊"),
                act("Browse", "/browse", "🔍"),
                act("Help", "/help", "❓"),
            ],
            system_prompt: "You are the YooHoo.Guru General Assistant. Help users \
                navigate the platform, explain features, and guide them to what \
                they need. Be helpful and friendly.",
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{filter_actions, SessionContext};
    use crate::routing::resolve_config;

    #[test]
    fn table_shape() {
        let table = route_configs();
        assert_eq!(table.len(), 44);
        // Exactly one catch-all, and it terminates the table.
        let any_count = table
            .iter()
            .filter(|c| matches!(c.matcher, PathMatcher::Any))
            .count();
        assert_eq!(any_count, 1);
        assert_eq!(table.last().unwrap().name, "fallback");
        assert!(std::ptr::eq(fallback_config(), table.last().unwrap()));
    }

    #[test]
    fn names_are_unique() {
        let table = route_configs();
        for (i, config) in table.iter().enumerate() {
            assert!(
                table.iter().skip(i + 1).all(|c| c.name != config.name),
                "duplicate name: {}",
                config.name
            );
        }
    }

    #[test]
    fn every_entry_is_complete() {
        for config in route_configs() {
            assert!(!config.name.is_empty());
            assert!(!config.quick_actions.is_empty(), "{}", config.name);
            assert!(!config.system_prompt.is_empty(), "{}", config.name);
        }
    }

    #[test]
    fn role_gated_actions_always_require_auth() {
        for config in route_configs() {
            for action in &config.quick_actions {
                if !action.allowed_roles.is_empty() {
                    assert!(
                        action.requires_auth,
                        "{}: '{}' lists roles but not requires_auth",
                        config.name, action.label
                    );
                }
            }
        }
    }

    #[test]
    fn pricing_links_cross_subdomains() {
        let pricing = resolve_config("/pricing");
        let external: Vec<_> = pricing
            .quick_actions
            .iter()
            .filter(|a| a.target.is_external())
            .map(|a| a.target.as_route_str())
            .collect();
        assert_eq!(
            external,
            vec![
                "https://coach.yoohoo.guru",
                "https://angel.yoohoo.guru",
                "https://heroes.yoohoo.guru"
            ]
        );
    }

    #[test]
    fn admin_page_shows_guests_only_the_globals() {
        let admin = resolve_config("/admin/users");
        assert_eq!(admin.name, "admin");
        let visible = filter_actions(&admin.quick_actions, &SessionContext::guest());
        let labels: Vec<_> = visible.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Main Menu", "Back"]);
    }

    #[test]
    fn admin_page_shows_admins_everything() {
        let admin = resolve_config("/admin/users");
        let session = SessionContext::authenticated(crate::types::Role::Admin);
        let visible = filter_actions(&admin.quick_actions, &session);
        assert_eq!(visible.len(), 2 + admin.quick_actions.len());
    }

    #[test]
    fn jobs_page_for_guests_keeps_open_actions() {
        let jobs = resolve_config("/jobs");
        assert_eq!(jobs.name, "job-browsing");
        let visible = filter_actions(&jobs.quick_actions, &SessionContext::guest());
        let labels: Vec<_> = visible.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Main Menu", "Back", "Browse Gurus"]);
    }

    #[test]
    fn global_actions_are_pinned() {
        assert_eq!(CORE_NAVIGATION_ACTIONS[0].label, "Main Menu");
        assert_eq!(CORE_NAVIGATION_ACTIONS[0].target.as_route_str(), "/");
        assert_eq!(CORE_NAVIGATION_ACTIONS[1].label, "Back");
        assert_eq!(CORE_NAVIGATION_ACTIONS[1].target.as_route_str(), "__BACK__");
        assert!(CORE_NAVIGATION_ACTIONS.iter().all(|a| a.always_show));
    }

    #[test]
    fn internal_targets_are_site_relative() {
        for config in route_configs() {
            for action in &config.quick_actions {
                if let ActionTarget::Internal(path) = action.target {
                    assert!(
                        path.starts_with('/') || path.starts_with('#'),
                        "{}: '{}' targets '{}'",
                        config.name,
                        action.label,
                        path
                    );
                }
            }
        }
    }
}

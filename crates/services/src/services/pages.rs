//! Display constants for the three routes. None of these figures are computed.

use models::models::{
    dashboard::{ActivityKind, AutomationCard, AutomationStatus, DashboardPage, RecentActivity, StatCard},
    landing::{CrewBuilderPage, FeatureCard, Hero, HomePage, HowItWorksStep, UseCase},
    message::Message,
    navigation::{NavLink, Navigation, Route},
};

use super::{
    catalog::{EXAMPLE_PROMPTS, GREETING},
    timeline::preview_samples,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn navigation() -> Navigation {
    Navigation {
        brand: "CrewBuilder".to_string(),
        links: Route::ALL.into_iter().map(NavLink::from).collect(),
        actions: strings(&["Sign In", "Get Started"]),
    }
}

pub fn home_page() -> HomePage {
    let features = [
        ("💬", "Conversational Setup", "Just describe what you want in plain English"),
        ("🤖", "Smart AI Agents", "Researcher, Writer, Analyst, and much more work together"),
        ("📊", "Business Results", "Track ROI and time saved automatically"),
        ("🎯", "No Code Required", "From idea to automation in minutes"),
    ];
    let use_cases = [
        (
            "🔍",
            "Monitor competitors and create weekly reports",
            "Track competitor activities, pricing, and content to stay ahead of the market",
        ),
        (
            "👥",
            "Screen job applications and schedule interviews",
            "Automatically review resumes, rank candidates, and coordinate interview schedules",
        ),
        (
            "📱",
            "Create social media content from my blog posts",
            "Transform long-form content into engaging social media posts across platforms",
        ),
        (
            "💡",
            "Analyze customer feedback and suggest improvements",
            "Process reviews and support tickets to identify trends and actionable insights",
        ),
    ];

    HomePage {
        hero: Hero {
            badge: "🚀 No-code AI automation platform".to_string(),
            headline: "Turn Any Business Process".to_string(),
            highlight: "Into an AI Team".to_string(),
            subheading: "Describe what you want to automate in plain English. We'll build and run the AI team for you.".to_string(),
            primary_cta: "Build Your First Crew".to_string(),
            secondary_cta: "Watch Demo".to_string(),
            trust_indicators: strings(&[
                "No credit card required",
                "Setup in 5 minutes",
                "Cancel anytime",
            ]),
        },
        features_heading: "Why Choose CrewBuilder?".to_string(),
        features_intro: "The easiest way to automate your business processes with AI. No technical expertise needed.".to_string(),
        features: features
            .into_iter()
            .map(|(icon, title, description)| FeatureCard {
                icon: icon.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        use_cases_heading: "Popular Use Cases".to_string(),
        use_cases_intro: "See how teams are using CrewBuilder to automate their most time-consuming tasks".to_string(),
        use_cases: use_cases
            .into_iter()
            .map(|(icon, title, description)| UseCase {
                icon: icon.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        use_cases_cta: "Start Building Your Crew".to_string(),
    }
}

pub fn crew_builder_page() -> CrewBuilderPage {
    let steps = [
        ("Describe Your Goal", "Tell us what process you want to automate"),
        ("AI Builds Your Crew", "We create specialized agents for your task"),
        ("Deploy & Monitor", "Your crew works autonomously while you track progress"),
    ];

    CrewBuilderPage {
        title: "Build Your AI Crew".to_string(),
        subtitle: "Describe what you want to automate in plain English".to_string(),
        input_placeholder: "Describe what you want to automate...".to_string(),
        greeting: Message::ai(GREETING),
        example_prompts: strings(&EXAMPLE_PROMPTS),
        how_it_works: steps
            .into_iter()
            .zip(1..)
            .map(|((title, description), step)| HowItWorksStep {
                step,
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        preview_samples: preview_samples(),
    }
}

pub fn dashboard_page() -> DashboardPage {
    let stats = [
        ("47", "Hours Saved This Month"),
        ("$8,400", "Revenue Impact"),
        ("2", "Active Automations"),
        ("92%", "Success Rate"),
    ];
    let recent = [
        (1, "Competitor Monitor", "Found 3 new product launches", "2 hours ago", ActivityKind::Success),
        (2, "Social Media Creator", "Posted 5 LinkedIn articles", "4 hours ago", ActivityKind::Success),
        (3, "Lead Generator", "Identified 12 qualified prospects", "6 hours ago", ActivityKind::Success),
        (4, "Sales Assistant", "Scheduled 3 demo calls", "1 day ago", ActivityKind::Info),
    ];

    DashboardPage {
        title: "Dashboard".to_string(),
        subtitle: "Track your automation performance and business impact".to_string(),
        stats: stats
            .into_iter()
            .map(|(value, label)| StatCard {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
        automations: vec![
            AutomationCard {
                id: 1,
                name: "Competitor Monitor".to_string(),
                description: "Weekly competitive intelligence reports".to_string(),
                status: AutomationStatus::Active,
                last_run: "2 hours ago".to_string(),
                runs: 24,
                hours_saved: 12,
                value_generated: 2400,
                success_rate: 95,
            },
            AutomationCard {
                id: 2,
                name: "Social Media Creator".to_string(),
                description: "Transform blog posts into social content".to_string(),
                status: AutomationStatus::Paused,
                last_run: "1 day ago".to_string(),
                runs: 12,
                hours_saved: 8,
                value_generated: 1800,
                success_rate: 88,
            },
        ],
        recent_activity: recent
            .into_iter()
            .map(|(id, crew, action, time, kind)| RecentActivity {
                id,
                crew: crew.to_string(),
                action: action.to_string(),
                time: time.to_string(),
                kind,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_has_three_client_routes() {
        let nav = navigation();
        let paths: Vec<_> = nav.links.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, ["/", "/build", "/dashboard"]);
    }

    #[test]
    fn test_dashboard_headline_numbers() {
        let page = dashboard_page();
        let values: Vec<_> = page.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["47", "$8,400", "2", "92%"]);
        assert_eq!(page.automations.len(), 2);
        assert_eq!(page.automations[0].success_rate, 95);
        assert_eq!(page.automations[1].status, AutomationStatus::Paused);
        assert_eq!(page.recent_activity.len(), 4);
    }

    #[test]
    fn test_builder_page_lists_example_prompts_in_order() {
        let page = crew_builder_page();
        assert_eq!(page.example_prompts.len(), 5);
        assert_eq!(
            page.example_prompts[0],
            "Monitor my competitors and send me weekly reports"
        );
        assert_eq!(page.how_it_works.last().map(|s| s.step), Some(3));
    }
}

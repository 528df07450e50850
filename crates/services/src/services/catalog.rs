//! Fixed crew catalog and the assistant's canned copy.
//!
//! Every string in here is user-visible marketing text and is reproduced verbatim,
//! including the quantitative claims. Nothing is computed.

use models::models::{
    crew_member::{CrewMember, MemberStatus},
    template::{TemplateCategory, TemplateSummary},
};

/// Literal definition of a crew member inside a template.
#[derive(Debug, Clone, Copy)]
pub struct MemberSpec {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub status: MemberStatus,
}

/// A catalog entry. Members sit at fixed positions: research, analysis, output.
#[derive(Debug, Clone, Copy)]
pub struct CrewTemplate {
    pub category: TemplateCategory,
    pub response: &'static str,
    pub members: [MemberSpec; 3],
}

impl CrewTemplate {
    /// Materialize the crew. Ids are the 1-based positions.
    pub fn crew(&self) -> Vec<CrewMember> {
        self.members
            .iter()
            .enumerate()
            .map(|(index, spec)| CrewMember {
                id: (index + 1).to_string(),
                name: spec.name.to_string(),
                role: spec.role.to_string(),
                description: spec.description.to_string(),
                status: spec.status,
            })
            .collect()
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            category: self.category,
            response: self.response.to_string(),
            crew: self.crew(),
        }
    }
}

const fn member(
    name: &'static str,
    role: &'static str,
    description: &'static str,
    status: MemberStatus,
) -> MemberSpec {
    MemberSpec {
        name,
        role,
        description,
        status,
    }
}

pub const GREETING: &str = "Hello! I'm your AI crew builder assistant. 🤖\n\nI'll help you create a specialized team of AI agents to automate any business process. Just tell me what you'd like to automate, and I'll design the perfect crew for the job.\n\nWhat would you like your AI team to handle for you?";

pub const FALLBACK_RESPONSE: &str = "I'd love to help you build the perfect AI crew! 🎯\n\nTo create the most effective team, could you tell me more about:\n\n• What specific business process you want to automate?\n• How often should this process run? (daily, weekly, monthly)\n• What kind of outputs or results do you expect?\n• Are there any specific tools or platforms involved?\n\nThe more details you provide, the better I can design your AI crew to deliver exactly what you need!";

pub const EXAMPLE_PROMPTS: [&str; 5] = [
    "Monitor my competitors and send me weekly reports",
    "Create social media posts from my blog articles",
    "Screen job applications and rank candidates",
    "Generate sales leads from LinkedIn",
    "Analyze customer feedback and sentiment",
];

pub const COMPETITOR_INTELLIGENCE: CrewTemplate = CrewTemplate {
    category: TemplateCategory::CompetitorIntelligence,
    response: "Excellent choice! 🎯 Competitive intelligence is crucial for staying ahead.\n\nI'm creating a specialized 3-agent crew that will:\n• Monitor competitor websites, social media, and news 24/7\n• Analyze trends and strategic moves\n• Deliver professional weekly reports with actionable insights\n\nThis will save you 8+ hours per week and ensure you never miss important competitor updates. Let me set up your agents...",
    members: [
        member(
            "Research Scout",
            "Data Collector",
            "Continuously monitors competitor websites, social media, press releases, and industry news",
            MemberStatus::Active,
        ),
        member(
            "Strategic Analyst",
            "Intelligence Expert",
            "Analyzes competitor data, identifies patterns, and extracts strategic insights",
            MemberStatus::Active,
        ),
        member(
            "Report Compiler",
            "Business Writer",
            "Creates professional weekly reports with executive summaries and recommendations",
            MemberStatus::Pending,
        ),
    ],
};

pub const CONTENT_REPURPOSING: CrewTemplate = CrewTemplate {
    category: TemplateCategory::ContentRepurposing,
    response: "Perfect! 📱 Content amplification is a game-changer for reach and engagement.\n\nI'm building a content transformation crew that will:\n• Extract key insights from your blog posts\n• Create platform-optimized content for LinkedIn, Twitter, etc.\n• Schedule posts at optimal engagement times\n\nThis typically increases social media engagement by 300% and saves 6+ hours per week. Setting up your creative team...",
    members: [
        member(
            "Content Analyzer",
            "Content Strategist",
            "Analyzes blog articles, extracts key points, and identifies shareable insights",
            MemberStatus::Active,
        ),
        member(
            "Social Creator",
            "Creative Writer",
            "Transforms content into engaging, platform-specific social media posts",
            MemberStatus::Active,
        ),
        member(
            "Distribution Manager",
            "Optimization Specialist",
            "Schedules posts at optimal times and tracks engagement metrics",
            MemberStatus::Pending,
        ),
    ],
};

pub const RECRUITMENT: CrewTemplate = CrewTemplate {
    category: TemplateCategory::Recruitment,
    response: "Smart move! 💼 Quality hiring is critical for business growth.\n\nI'm assembling a recruitment crew that will:\n• Screen resumes against your specific criteria\n• Rank candidates by fit and qualifications\n• Schedule interviews with top candidates automatically\n\nThis reduces hiring time by 70% and ensures you only interview the best candidates. Building your recruitment team...",
    members: [
        member(
            "Resume Screener",
            "Talent Scout",
            "Reviews applications, checks qualifications, and filters based on your criteria",
            MemberStatus::Active,
        ),
        member(
            "Candidate Ranker",
            "Assessment Expert",
            "Scores and ranks candidates using AI-powered evaluation methods",
            MemberStatus::Active,
        ),
        member(
            "Interview Coordinator",
            "Scheduling Agent",
            "Contacts top candidates and schedules interviews automatically",
            MemberStatus::Pending,
        ),
    ],
};

pub const LEAD_GENERATION: CrewTemplate = CrewTemplate {
    category: TemplateCategory::LeadGeneration,
    response: "Excellent! 🚀 Lead generation is the lifeblood of business growth.\n\nI'm creating a sales prospecting crew that will:\n• Find qualified prospects on LinkedIn matching your ideal customer profile\n• Research company backgrounds and pain points\n• Generate personalized outreach messages\n\nThis typically generates 50+ qualified leads per week and increases response rates by 400%. Setting up your sales team...",
    members: [
        member(
            "Prospect Hunter",
            "Lead Researcher",
            "Searches LinkedIn and databases for prospects matching your ideal customer profile",
            MemberStatus::Active,
        ),
        member(
            "Company Intel",
            "Research Analyst",
            "Researches prospect companies, recent news, and potential pain points",
            MemberStatus::Active,
        ),
        member(
            "Outreach Specialist",
            "Sales Writer",
            "Crafts personalized connection requests and follow-up sequences",
            MemberStatus::Pending,
        ),
    ],
};

pub const FEEDBACK_ANALYSIS: CrewTemplate = CrewTemplate {
    category: TemplateCategory::FeedbackAnalysis,
    response: "Great insight! 📊 Customer feedback is gold for business improvement.\n\nI'm building a feedback analysis crew that will:\n• Collect feedback from all customer touchpoints\n• Analyze sentiment and identify key themes\n• Provide actionable improvement recommendations\n\nThis helps increase customer satisfaction by 25% and reduces churn significantly. Creating your analysis team...",
    members: [
        member(
            "Feedback Collector",
            "Data Aggregator",
            "Gathers customer feedback from reviews, surveys, support tickets, and social media",
            MemberStatus::Active,
        ),
        member(
            "Sentiment Analyzer",
            "AI Analyst",
            "Performs sentiment analysis and identifies recurring themes and issues",
            MemberStatus::Active,
        ),
        member(
            "Insights Generator",
            "Business Consultant",
            "Creates actionable recommendations and improvement strategies",
            MemberStatus::Pending,
        ),
    ],
};

/// Catalog in classifier priority order.
pub const TEMPLATES: [CrewTemplate; 5] = [
    COMPETITOR_INTELLIGENCE,
    CONTENT_REPURPOSING,
    RECRUITMENT,
    LEAD_GENERATION,
    FEEDBACK_ANALYSIS,
];

pub fn template(category: TemplateCategory) -> &'static CrewTemplate {
    match category {
        TemplateCategory::CompetitorIntelligence => &COMPETITOR_INTELLIGENCE,
        TemplateCategory::ContentRepurposing => &CONTENT_REPURPOSING,
        TemplateCategory::Recruitment => &RECRUITMENT,
        TemplateCategory::LeadGeneration => &LEAD_GENERATION,
        TemplateCategory::FeedbackAnalysis => &FEEDBACK_ANALYSIS,
    }
}

//! Built-in site-wide knowledge table.
//!
//! Order matters: on equal scores the earlier entry wins.

use advisor_core::types::Category;

use crate::knowledge::{KnowledgeBase, DEFAULT_FALLBACK_ID};

const FALLBACK_ANSWER: &str = "I'm the Swen Tech Solutions Advisor, trained on our entire \
     architectural methodology. I can tell you about our ERP systems, AI agents, pricing, team, \
     or free developer tools. What are you looking to build?";

/// (id, keywords, answer, action label, action link)
type Entry = (
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
    &'static str,
);

const ENTRIES: &[Entry] = &[
    (
        "web_dev",
        &[
            "web",
            "website",
            "react",
            "frontend",
            "custom web",
            "development",
            "responsive",
            "frameworks",
        ],
        "We build premium, responsive websites using modern frameworks like React and Next.js. \
         Our focus is on high conversion and maximum visibility. We specialize in transforming \
         complex business requirements into sleek digital interfaces.",
        "Our Services",
        "services.html",
    ),
    (
        "ai_agents",
        &[
            "ai",
            "bot",
            "agent",
            "automation",
            "ml",
            "chatbot",
            "workflow",
            "process automation",
        ],
        "SWEN-TECH specializes in 'Practical AI'. We build intelligent agents that automate \
         customer support, streamline lead scoring, and optimize complex business workflows \
         with measurable ROI.",
        "See AI Services",
        "services.html",
    ),
    (
        "erp_systems",
        &[
            "erp",
            "manufacturing",
            "inventory",
            "factory",
            "production",
            "waste",
            "operations",
            "tracking",
        ],
        "Our enterprise-grade ERP systems are designed for high-stakes manufacturing. We focus \
         on localized data integrity, real-time inventory tracking, and automated waste \
         calculation using FastAPI/React stacks.",
        "View Case Studies",
        "portfolio.html",
    ),
    (
        "team_karthigeyan",
        &[
            "karthigeyan",
            "lead",
            "fullstack",
            "founder",
            "who is the developer",
        ],
        "Karthigeyan B S is our Lead Full-Stack Developer. He specializes in scalable web apps, \
         AI automation, and enterprise ERP solutions. He leads the technical vision here at \
         SWEN-TECH.",
        "About Team",
        "about.html",
    ),
    (
        "team_design",
        &[
            "designer",
            "ui",
            "ux",
            "visual",
            "karthick raja",
            "iyyappan",
            "look",
            "aesthetic",
        ],
        "Our design team, led by S. Karthick Raja (UI/UX) and U. Iyyappan (Visual), crafts \
         premium, intuitive experiences. They ensure every enterprise tool we build is as \
         beautiful as it is functional.",
        "Meet Design Team",
        "about.html",
    ),
    (
        "team_operations",
        &[
            "backend",
            "api",
            "dhrona",
            "tracking",
            "gowtham",
            "gokul",
            "order tracking",
        ],
        "Our operations and backend are powered by Dhrona Ragav (Backend Specialist) and our \
         Order Tracking Managers, K. Gowtham and Gokul Krishnan, who ensure seamless ERP \
         integrations and delivery.",
        "Operations Team",
        "about.html",
    ),
    (
        "case_studies",
        &[
            "portfolio",
            "projects",
            "case study",
            "medifabb",
            "srivari",
            "examples",
            "clients",
        ],
        "We have a diverse portfolio including the KRG Medifabb ERP and Srivari Alloys \
         operational systems. Our projects consistently deliver massive efficiency gains for \
         manufacturing clients.",
        "Portfolio Hub",
        "portfolio.html",
    ),
    (
        "tools_hub",
        &[
            "tools",
            "api tester",
            "speed",
            "performance",
            "responsive checker",
            "analyze",
            "free tools",
        ],
        "We offer free utility tools for developers and businesses, including an API Speed \
         Tester, Website Performance Analyzer, and a Mobile Responsiveness Simulator.",
        "Explore Tools",
        "tools.html",
    ),
    (
        "pricing_estimator",
        &[
            "cost",
            "price",
            "how much",
            "quote",
            "budget",
            "estimator",
            "calculator",
        ],
        "You can get an instant quote using our Interactive Pricing Calculator or a deep \
         technical estimate using our AI Project Estimator. We tailor every plan to your \
         specific ROI goals.",
        "Start Estimator",
        "estimator.html",
    ),
    (
        "contact_consultation",
        &[
            "meet",
            "call",
            "book",
            "contact",
            "email",
            "consultation",
            "talk",
            "expert",
        ],
        "I'd love to connect you with our principal architects. We offer free consultations to \
         help map out your digital transformation roadmap. Ready to book your slot?",
        "Contact Us",
        "contact.html",
    ),
    (
        "who_are_we",
        &[
            "who are you",
            "swentech",
            "what do you do",
            "business",
            "company",
            "swen tech solutions",
        ],
        "Swen Tech Solutions (also known as Swen Tech Solutions) is a premium digital \
         engineering firm. We bridge the gap between complex business requirements and \
         technical innovation.",
        "Learn More",
        "about.html",
    ),
];

impl KnowledgeBase {
    /// The site-wide table shipped with the advisor.
    pub fn builtin() -> Self {
        let categories = ENTRIES
            .iter()
            .map(|(id, keywords, answer, label, link)| {
                Category::new(*id, keywords.iter().copied(), *answer).with_action(*label, *link)
            })
            .collect();
        Self::new_unchecked(
            categories,
            Category::fallback(DEFAULT_FALLBACK_ID, FALLBACK_ANSWER),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_satisfies_invariants() {
        let kb = KnowledgeBase::builtin();
        let validated = KnowledgeBase::new(kb.categories().to_vec(), kb.fallback().clone());
        assert!(validated.is_ok(), "builtin table invalid: {:?}", validated.err());
    }

    #[test]
    fn test_builtin_order_and_size() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), 11);
        assert_eq!(kb.categories()[0].id, "web_dev");
        assert_eq!(kb.categories()[10].id, "who_are_we");
        assert_eq!(kb.fallback().id, "default");
    }

    #[test]
    fn test_builtin_answers_match_site_copy() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.get("who_are_we").unwrap().answer,
            "Swen Tech Solutions (also known as Swen Tech Solutions) is a premium digital \
             engineering firm. We bridge the gap between complex business requirements and \
             technical innovation."
        );
    }

    #[test]
    fn test_builtin_every_category_has_action() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.categories().iter().all(|c| c.action.is_some()));
        assert!(kb.fallback().action.is_none());
        assert_eq!(
            kb.get("pricing_estimator").unwrap().action.as_ref().unwrap().link,
            "estimator.html"
        );
    }
}

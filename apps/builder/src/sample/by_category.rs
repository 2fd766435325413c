//! Per-category seed table used by the template gallery and the full-page
//! template preview. Keyed on a Template's declared `category`; unmatched
//! categories fall back to a generic technology-professional record.
//!
//! This table is deliberately independent of the per-id table in
//! [`super::by_template`] — the two serve different call sites and their
//! values are allowed to diverge.

use super::{certification, education, experience, language, opt, project, reference, skill};
use crate::models::{Language, PersonalInfo, Resume};

/// Profession-specific preview record for a template category. The caller
/// supplies the template id the record should carry.
pub fn for_category(category: &str, template_id: &str) -> Resume {
    let mut resume = match category {
        "Finance" => finance(),
        "Sales" => sales(),
        "Legal" => legal(),
        _ => technology(),
    };
    resume.template_id = template_id.to_string();
    resume
}

fn base_languages() -> Vec<Language> {
    vec![
        language("English", "Native"),
        language("Spanish", "Conversational"),
    ]
}

fn finance() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            full_name: "Michael Chen CPA".to_string(),
            email: opt("michael.chen@email.com"),
            phone: "+1 (555) 234-5678".to_string(),
            address: opt("456 Financial District, Suite 200"),
            city: opt("New York"),
            country: opt("United States"),
            postal_code: opt("10005"),
            linkedin: opt("https://linkedin.com/in/michaelchencpa"),
            github: None,
            website: None,
            summary: opt(
                "Certified Public Accountant with 8+ years of experience in financial analysis, \
                 audit, and tax compliance. Specialized in corporate finance, risk management, \
                 and regulatory compliance with expertise in GAAP and IFRS standards.",
            ),
        },
        education: vec![
            education(
                "Master of Business Administration",
                "Finance & Accounting",
                "Wharton School, University of Pennsylvania",
                "2014",
                "2016",
                false,
                "3.8",
                "Specialized in Corporate Finance and Financial Reporting.",
            ),
            education(
                "Bachelor of Commerce",
                "Accounting & Finance",
                "New York University",
                "2010",
                "2014",
                false,
                "3.7",
                "Magna Cum Laude. Member of Beta Alpha Psi Honor Society.",
            ),
        ],
        experience: vec![
            experience(
                "Senior Financial Analyst",
                "Goldman Sachs",
                "New York, NY",
                "2020",
                "",
                true,
                "Lead financial analysis and reporting for investment banking division with \
                 $2B+ portfolio.",
                &[
                    "Reduced monthly closing process by 25% through automation",
                    "Led audit team for SOX compliance across 15 subsidiaries",
                    "Managed budget variance analysis saving $1.2M annually",
                    "Implemented new ERP system improving reporting accuracy by 40%",
                ],
            ),
            experience(
                "Staff Accountant",
                "KPMG",
                "New York, NY",
                "2016",
                "2020",
                false,
                "Performed external audits for Fortune 500 companies across various industries.",
                &[
                    "Completed 20+ audit engagements with zero material weaknesses",
                    "Specialized in revenue recognition under ASC 606",
                    "Mentored 5 junior staff members",
                    "Received \"Outstanding Performance\" rating for 3 consecutive years",
                ],
            ),
        ],
        skills: vec![
            skill("Financial Analysis", "Expert"),
            skill("GAAP/IFRS", "Expert"),
            skill("Tax Compliance", "Advanced"),
            skill("SAP ERP", "Advanced"),
            skill("Excel/VBA", "Expert"),
            skill("QuickBooks", "Advanced"),
            skill("Audit & Assurance", "Expert"),
            skill("Risk Management", "Intermediate"),
        ],
        languages: base_languages(),
        projects: vec![
            project(
                "SOX Compliance Implementation",
                "Led cross-functional team to implement Sarbanes-Oxley compliance framework \
                 across 12 business units, ensuring regulatory adherence and internal control \
                 effectiveness.",
                &[
                    "Internal Controls",
                    "Risk Assessment",
                    "Process Documentation",
                    "SAP",
                ],
                "",
                "2023",
                "2023",
            ),
            project(
                "Financial Systems Integration",
                "Managed migration from legacy accounting system to SAP S/4HANA, resulting in \
                 improved reporting capabilities and reduced month-end close time.",
                &[
                    "SAP S/4HANA",
                    "Data Migration",
                    "Process Automation",
                    "Financial Reporting",
                ],
                "",
                "2022",
                "2023",
            ),
        ],
        certifications: vec![certification(
            "Certified Public Accountant",
            "New York State Board of Accountancy",
            "2016",
            "NY-CPA-2016-MC",
            "",
        )],
        references: vec![reference(
            "Laura Bennett",
            "Managing Director",
            "Goldman Sachs",
            "l.bennett@gs.com",
            "+1 (212) 555-0142",
            "Direct Manager",
        )],
        ..Default::default()
    }
}

fn sales() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            full_name: "Jessica Rodriguez".to_string(),
            email: opt("jessica.rodriguez@email.com"),
            phone: "+1 (555) 345-6789".to_string(),
            address: opt("789 Business Park Dr, Suite 300"),
            city: opt("Los Angeles"),
            country: opt("United States"),
            postal_code: opt("90210"),
            linkedin: opt("https://linkedin.com/in/jessicarodriguezsales"),
            github: None,
            website: None,
            summary: opt(
                "Results-driven Sales Executive with 7+ years of experience exceeding revenue \
                 targets and building strategic client relationships. Proven track record of \
                 generating $10M+ in annual revenue through consultative selling and territory \
                 expansion.",
            ),
        },
        education: vec![
            education(
                "Master of Business Administration",
                "Marketing & Sales Management",
                "UCLA Anderson School of Management",
                "2015",
                "2017",
                false,
                "3.6",
                "Concentration in Strategic Marketing and Business Development.",
            ),
            education(
                "Bachelor of Business Administration",
                "Marketing",
                "University of Southern California",
                "2011",
                "2015",
                false,
                "3.5",
                "Dean's List. President of Marketing Student Association.",
            ),
        ],
        experience: vec![
            experience(
                "Senior Sales Manager",
                "Salesforce",
                "Los Angeles, CA",
                "2021",
                "",
                true,
                "Lead enterprise sales team managing $15M territory, focusing on Fortune 500 \
                 accounts in technology and manufacturing sectors.",
                &[
                    "Exceeded annual quota by 145% for three consecutive years",
                    "Generated $12.5M in new business revenue in 2023",
                    "Built and managed pipeline of 200+ qualified prospects",
                    "Led team of 6 sales representatives achieving 125% of team target",
                    "Closed largest deal in company history worth $2.8M",
                ],
            ),
            experience(
                "Account Executive",
                "Oracle Corporation",
                "Los Angeles, CA",
                "2018",
                "2021",
                false,
                "Managed key accounts in the entertainment and media industry, selling cloud \
                 solutions and enterprise software.",
                &[
                    "Consistently achieved 130%+ of annual sales targets",
                    "Expanded existing accounts by average of 40% year-over-year",
                    "Won \"Rookie of the Year\" award in first year",
                    "Developed strategic partnerships with 15+ major clients",
                ],
            ),
        ],
        skills: vec![
            skill("Consultative Selling", "Expert"),
            skill("Account Management", "Expert"),
            skill("CRM (Salesforce)", "Advanced"),
            skill("Lead Generation", "Expert"),
            skill("Negotiation", "Advanced"),
            skill("Pipeline Management", "Expert"),
            skill("Presentation Skills", "Advanced"),
            skill("Market Analysis", "Intermediate"),
        ],
        languages: base_languages(),
        projects: vec![
            project(
                "Enterprise Client Acquisition Program",
                "Developed and executed comprehensive sales strategy targeting Fortune 500 \
                 companies, resulting in 25 new enterprise clients and $8M in annual recurring \
                 revenue.",
                &["CRM", "Sales Analytics", "Lead Scoring", "Account Planning"],
                "",
                "2023",
                "2023",
            ),
            project(
                "Digital Transformation Sales Initiative",
                "Led cross-functional team to develop sales methodology for cloud \
                 transformation services, achieving 180% of target in first quarter of launch.",
                &[
                    "Cloud Solutions",
                    "Digital Strategy",
                    "Customer Success",
                    "Sales Enablement",
                ],
                "",
                "2022",
                "2023",
            ),
        ],
        certifications: vec![certification(
            "Certified Sales Professional",
            "National Association of Sales Professionals",
            "2019",
            "NASP-CSP-2019-JR",
            "",
        )],
        references: vec![reference(
            "Thomas Avery",
            "Regional VP of Sales",
            "Salesforce",
            "t.avery@salesforce.com",
            "+1 (213) 555-0167",
            "Direct Manager",
        )],
        ..Default::default()
    }
}

fn legal() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            full_name: "David Thompson, Esq.".to_string(),
            email: opt("david.thompson@lawfirm.com"),
            phone: "+1 (555) 456-7890".to_string(),
            address: opt("321 Legal Plaza, Floor 25"),
            city: opt("Chicago"),
            country: opt("United States"),
            postal_code: opt("60601"),
            linkedin: opt("https://linkedin.com/in/davidthompsonlaw"),
            github: None,
            website: None,
            summary: opt(
                "Experienced Corporate Attorney with 10+ years specializing in mergers & \
                 acquisitions, securities law, and corporate governance. Licensed to practice \
                 in Illinois and New York with expertise in complex commercial transactions.",
            ),
        },
        education: vec![
            education(
                "Juris Doctor (J.D.)",
                "Corporate Law",
                "Harvard Law School",
                "2011",
                "2014",
                false,
                "",
                "Magna Cum Laude. Editor, Harvard Law Review. Specialized in Corporate Finance \
                 and Securities Regulation.",
            ),
            education(
                "Bachelor of Arts",
                "Political Science",
                "Northwestern University",
                "2007",
                "2011",
                false,
                "3.8",
                "Summa Cum Laude. Phi Beta Kappa Honor Society.",
            ),
        ],
        experience: vec![
            experience(
                "Partner",
                "Skadden, Arps, Slate, Meagher & Flom LLP",
                "Chicago, IL",
                "2022",
                "",
                true,
                "Lead corporate transactions practice group, advising Fortune 500 companies on \
                 complex M&A deals, securities offerings, and corporate governance matters.",
                &[
                    "Closed $2.5B in M&A transactions over the past two years",
                    "Successfully defended major corporate client in $500M securities litigation",
                    "Led due diligence team for 15+ IPO transactions",
                    "Recognized as \"Rising Star\" by Super Lawyers for 5 consecutive years",
                    "Published 12+ articles in leading legal journals",
                ],
            ),
            experience(
                "Senior Associate",
                "Kirkland & Ellis LLP",
                "Chicago, IL",
                "2017",
                "2022",
                false,
                "Specialized in private equity transactions, representing both sponsors and \
                 portfolio companies in acquisition and exit strategies.",
                &[
                    "Participated in 50+ private equity transactions totaling $8B",
                    "Drafted and negotiated complex purchase agreements",
                    "Managed cross-border transactions across 10+ jurisdictions",
                    "Mentored 8 junior associates and summer interns",
                ],
            ),
        ],
        skills: vec![
            skill("Mergers & Acquisitions", "Expert"),
            skill("Securities Law", "Expert"),
            skill("Corporate Governance", "Advanced"),
            skill("Contract Negotiation", "Expert"),
            skill("Due Diligence", "Expert"),
            skill("Litigation Management", "Advanced"),
            skill("Regulatory Compliance", "Advanced"),
            skill("Legal Research", "Expert"),
        ],
        languages: base_languages(),
        projects: vec![
            project(
                "Cross-Border Acquisition",
                "Led legal team for $1.2B acquisition of European technology company by \
                 US-based Fortune 100 client, involving complex regulatory approvals across \
                 multiple jurisdictions.",
                &[
                    "Cross-border M&A",
                    "Regulatory Approval",
                    "Tax Structuring",
                    "Employment Law",
                ],
                "",
                "2023",
                "2023",
            ),
            project(
                "IPO Legal Advisory",
                "Served as lead counsel for technology startup's $400M initial public \
                 offering, managing SEC filings, underwriter agreements, and compliance \
                 requirements.",
                &[
                    "Securities Law",
                    "SEC Compliance",
                    "Corporate Finance",
                    "Public Offerings",
                ],
                "",
                "2022",
                "2023",
            ),
        ],
        certifications: vec![
            certification(
                "Licensed Attorney - Illinois",
                "Illinois State Bar Association",
                "2014",
                "IL-BAR-2014-DT",
                "",
            ),
            certification(
                "Licensed Attorney - New York",
                "New York State Bar Association",
                "2015",
                "NY-BAR-2015-DT",
                "",
            ),
        ],
        references: vec![reference(
            "Eleanor Vasquez",
            "Senior Partner",
            "Skadden, Arps, Slate, Meagher & Flom LLP",
            "e.vasquez@skadden.com",
            "+1 (312) 555-0139",
            "Practice Group Lead",
        )],
        ..Default::default()
    }
}

/// Generic technology-professional record for unmatched categories.
fn technology() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            full_name: "Sarah Johnson".to_string(),
            email: opt("sarah.johnson@email.com"),
            phone: "+1 (555) 123-4567".to_string(),
            address: opt("123 Professional Ave, Suite 100"),
            city: opt("San Francisco"),
            country: opt("United States"),
            postal_code: opt("94105"),
            linkedin: opt("https://linkedin.com/in/sarahjohnson"),
            github: opt("https://github.com/sarahjohnson"),
            website: opt("https://sarahjohnson.dev"),
            summary: opt(
                "Experienced Software Engineer with 5+ years of expertise in full-stack \
                 development, specializing in React, Node.js, and cloud technologies.",
            ),
        },
        education: vec![
            education(
                "Master of Science",
                "Computer Science",
                "Stanford University",
                "2016",
                "2018",
                false,
                "3.8",
                "Specialized in Machine Learning and Distributed Systems.",
            ),
            education(
                "Bachelor of Science",
                "Software Engineering",
                "UC Berkeley",
                "2012",
                "2016",
                false,
                "3.7",
                "Magna Cum Laude. President of Computer Science Student Association.",
            ),
        ],
        experience: vec![
            experience(
                "Senior Software Engineer",
                "TechCorp Inc.",
                "San Francisco, CA",
                "2021",
                "",
                true,
                "Lead development of microservices architecture serving 2M+ users.",
                &[
                    "Reduced application load time by 40%",
                    "Led team of 4 developers",
                    "Implemented CI/CD pipeline",
                ],
            ),
            experience(
                "Software Engineer",
                "StartupXYZ",
                "Palo Alto, CA",
                "2019",
                "2021",
                false,
                "Full-stack development using React, Node.js, and PostgreSQL.",
                &[
                    "Developed RESTful APIs handling 10K+ requests",
                    "Created responsive web application",
                    "Integrated third-party payment systems",
                ],
            ),
        ],
        skills: vec![
            skill("JavaScript", "Expert"),
            skill("React", "Expert"),
            skill("Node.js", "Advanced"),
            skill("Python", "Advanced"),
            skill("TypeScript", "Advanced"),
            skill("AWS", "Intermediate"),
        ],
        languages: base_languages(),
        projects: vec![project(
            "E-Commerce Platform",
            "Full-stack e-commerce solution with React frontend and Node.js backend.",
            &["React", "Node.js", "PostgreSQL", "Stripe"],
            "https://github.com/sarahjohnson/ecommerce",
            "2023",
            "2023",
        )],
        certifications: vec![certification(
            "AWS Solutions Architect Associate",
            "Amazon Web Services",
            "2023",
            "",
            "https://aws.amazon.com/certification/",
        )],
        references: vec![reference(
            "Michael Chen",
            "Engineering Manager",
            "TechCorp Inc.",
            "michael.chen@techcorp.com",
            "+1 (555) 987-6543",
            "",
        )],
        ..Default::default()
    }
}

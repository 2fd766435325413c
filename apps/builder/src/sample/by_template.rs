//! Per-template-id seed table used by the builder page. Lookup is by exact
//! id; a miss returns the generic placeholder record.

use super::{certification, education, experience, language, opt, project, reference, skill};
use crate::models::{PersonalInfo, Resume};

/// Curated preview record for a template id, or the generic default on a
/// miss. Every record populates every section so each layout's conditional
/// blocks can be exercised.
pub fn for_template(template_id: &str) -> Resume {
    match template_id {
        "2" => modern_executive(),
        "3" => creative_designer(),
        "4" => minimalist_clean(),
        "5" => academic_scholar(),
        "11" => legal_professional(),
        _ => generic(),
    }
}

fn modern_executive() -> Resume {
    Resume {
        template_id: "2".to_string(),
        personal_info: PersonalInfo {
            full_name: "Alexander Mitchell".to_string(),
            email: opt("alexander.mitchell@executive.com"),
            phone: "+1 (555) 234-5678".to_string(),
            address: opt("500 Executive Plaza, Suite 2000"),
            city: opt("New York"),
            country: opt("United States"),
            postal_code: opt("10001"),
            linkedin: opt("https://linkedin.com/in/alexandermitchell"),
            github: None,
            website: opt("https://alexandermitchell.executive"),
            summary: opt(
                "Visionary C-Level Executive with 15+ years driving digital transformation, \
                 strategic growth, and operational excellence across Fortune 500 companies. \
                 Proven track record of scaling organizations, leading high-performance teams, \
                 and delivering sustainable revenue growth in competitive markets.",
            ),
        },
        education: vec![
            education(
                "Master of Business Administration",
                "Strategic Management & Leadership",
                "Harvard Business School",
                "2006",
                "2008",
                false,
                "3.9",
                "Concentrated in Corporate Strategy and Leadership. Case study finalist. Leadership Fellow.",
            ),
            education(
                "Bachelor of Science",
                "Economics",
                "Wharton School, University of Pennsylvania",
                "2002",
                "2006",
                false,
                "3.8",
                "Summa Cum Laude. Phi Beta Kappa Society.",
            ),
        ],
        experience: vec![
            experience(
                "Chief Executive Officer",
                "TechVision Corp",
                "New York, NY",
                "2020",
                "",
                true,
                "Lead strategic vision and operations for $2B technology company with 5,000+ \
                 employees across 12 countries. Drive digital transformation initiatives and \
                 sustainable growth strategies.",
                &[
                    "Increased annual revenue by 180% from $800M to $2.2B in 4 years",
                    "Successfully executed 8 strategic acquisitions totaling $400M",
                    "Led company through IPO raising $500M in capital",
                    "Expanded global footprint from 3 to 12 countries",
                ],
            ),
            experience(
                "Chief Operations Officer",
                "InnovateGlobal Solutions",
                "San Francisco, CA",
                "2016",
                "2020",
                false,
                "Oversaw global operations, supply chain, and business development for leading \
                 software company serving enterprise clients worldwide.",
                &[
                    "Optimized global operations reducing costs by 35% while improving efficiency",
                    "Established strategic partnerships generating $150M in new revenue",
                    "Built and scaled international teams across 6 new markets",
                ],
            ),
            experience(
                "Vice President of Strategy",
                "Pinnacle Consulting Group",
                "Boston, MA",
                "2012",
                "2016",
                false,
                "Developed and executed strategic initiatives for Fortune 500 clients across \
                 technology, healthcare, and financial services sectors.",
                &[
                    "Led strategic consulting projects worth over $50M in combined value",
                    "Drove digital transformation initiatives for 25+ enterprise clients",
                    "Grew consulting practice by 200% over 4-year tenure",
                ],
            ),
        ],
        skills: vec![
            skill("Strategic Planning", "Expert"),
            skill("Digital Transformation", "Expert"),
            skill("Operations Management", "Expert"),
            skill("Mergers & Acquisitions", "Advanced"),
            skill("Team Leadership", "Expert"),
            skill("Financial Analysis", "Advanced"),
            skill("Business Development", "Expert"),
            skill("Change Management", "Advanced"),
        ],
        languages: vec![
            language("English", "Native"),
            language("Spanish", "Conversational"),
            language("Mandarin", "Basic"),
        ],
        projects: vec![
            project(
                "Global Digital Transformation Initiative",
                "Led enterprise-wide digital transformation across 12 countries, implementing \
                 cloud infrastructure, AI-powered analytics, and automated workflows resulting \
                 in 40% operational efficiency improvement.",
                &["Cloud Computing", "AI/ML", "Process Automation", "Data Analytics"],
                "",
                "2021",
                "2023",
            ),
            project(
                "Strategic Acquisition Program",
                "Orchestrated comprehensive acquisition strategy identifying, evaluating, and \
                 successfully integrating 8 strategic acquisitions totaling $400M to expand \
                 market presence and capabilities.",
                &[
                    "Due Diligence",
                    "Integration Management",
                    "Financial Modeling",
                    "Risk Assessment",
                ],
                "",
                "2020",
                "2024",
            ),
        ],
        certifications: vec![
            certification(
                "Certified Strategic Management Professional",
                "Strategic Management Society",
                "2019",
                "SMP-2019-AM",
                "",
            ),
            certification(
                "Advanced Leadership Certificate",
                "Harvard Business School Executive Education",
                "2018",
                "HBS-ALC-2018",
                "",
            ),
        ],
        references: vec![
            reference(
                "Patricia Williams",
                "Board Member",
                "TechVision Corp",
                "p.williams@techvision.com",
                "+1 (555) 987-6543",
                "Board Supervisor",
            ),
            reference(
                "Robert Chen",
                "Managing Partner",
                "Pinnacle Consulting Group",
                "r.chen@pinnacle.com",
                "+1 (555) 876-5432",
                "Former Supervisor",
            ),
        ],
        ..Default::default()
    }
}

fn creative_designer() -> Resume {
    Resume {
        template_id: "3".to_string(),
        personal_info: PersonalInfo {
            full_name: "Sofia Rodriguez".to_string(),
            email: opt("sofia@creativestudio.design"),
            phone: "+1 (555) 345-6789".to_string(),
            address: opt("800 Design District"),
            city: opt("Los Angeles"),
            country: opt("United States"),
            postal_code: opt("90028"),
            linkedin: opt("https://linkedin.com/in/sofiarodriguezdesign"),
            github: opt("https://github.com/sofia-design"),
            website: opt("https://sofiarodriguez.design"),
            summary: opt(
                "Award-winning Creative Director and UX/UI Designer with 8+ years crafting \
                 innovative digital experiences for global brands. Specializes in user-centered \
                 design, brand identity, and interactive storytelling with expertise across web, \
                 mobile, and emerging technologies.",
            ),
        },
        education: vec![
            education(
                "Master of Fine Arts",
                "Digital Media & Interactive Design",
                "Art Center College of Design",
                "2014",
                "2016",
                false,
                "3.95",
                "Thesis: \"Immersive Brand Experiences in Virtual Reality.\" Graduate Teaching Assistant.",
            ),
            education(
                "Bachelor of Fine Arts",
                "Graphic Design & Visual Communications",
                "California Institute of the Arts",
                "2010",
                "2014",
                false,
                "3.8",
                "Dean's List. Student Gallery Featured Artist. Adobe Design Achievement Award.",
            ),
        ],
        experience: vec![
            experience(
                "Creative Director",
                "Pixel Perfect Studios",
                "Los Angeles, CA",
                "2021",
                "",
                true,
                "Lead creative vision and design strategy for boutique digital agency serving \
                 entertainment, tech, and lifestyle brands. Manage team of 12 designers, \
                 developers, and strategists.",
                &[
                    "Increased agency revenue by 250% through strategic client acquisition and retention",
                    "Won 8 industry awards including Webby Award and Communication Arts Design Annual",
                    "Led rebranding projects for 3 Fortune 500 companies resulting in 40% brand recognition increase",
                    "Established agency's first VR/AR design practice generating $500K new revenue",
                ],
            ),
            experience(
                "Senior UX/UI Designer",
                "Netflix Design Studio",
                "Los Gatos, CA",
                "2018",
                "2021",
                false,
                "Designed user experiences for Netflix original content discovery, \
                 personalization features, and emerging platform initiatives across web, \
                 mobile, and connected TV.",
                &[
                    "Redesigned content discovery flow increasing user engagement by 35%",
                    "Led design for Netflix VR experience with 2M+ downloads in first 6 months",
                    "Collaborated with data science team to optimize recommendation algorithms UI",
                    "Mentored 6 junior designers through design career development program",
                ],
            ),
            experience(
                "Digital Designer",
                "IDEO San Francisco",
                "San Francisco, CA",
                "2016",
                "2018",
                false,
                "Created human-centered digital solutions for healthcare, education, and \
                 financial services clients through design thinking methodology and rapid \
                 prototyping.",
                &[
                    "Designed healthcare app improving patient medication adherence by 60%",
                    "Led design research studies with 200+ participants across 5 user segments",
                    "Developed design system adopted by 15+ product teams across multiple clients",
                ],
            ),
        ],
        skills: vec![
            skill("UI/UX Design", "Expert"),
            skill("Creative Direction", "Expert"),
            skill("Brand Identity", "Advanced"),
            skill("Figma", "Expert"),
            skill("Adobe Creative Suite", "Expert"),
            skill("Prototyping", "Advanced"),
            skill("Design Systems", "Advanced"),
            skill("User Research", "Advanced"),
            skill("Motion Graphics", "Intermediate"),
            skill("VR/AR Design", "Intermediate"),
        ],
        languages: vec![
            language("English", "Native"),
            language("Spanish", "Native"),
            language("Portuguese", "Conversational"),
        ],
        projects: vec![
            project(
                "Immersive Brand Experience - Global Fashion Week",
                "Created interactive VR experience for luxury fashion brand showcasing \
                 collections in virtual runway shows. Integrated haptic feedback and spatial \
                 audio for fully immersive brand storytelling.",
                &[
                    "VR Design",
                    "Unity 3D",
                    "Spatial Audio",
                    "Haptic Feedback",
                    "Brand Storytelling",
                ],
                "https://fashionweek-vr.example.com",
                "2023",
                "2023",
            ),
            project(
                "Netflix Original Content Discovery Redesign",
                "Reimagined Netflix's content discovery experience using AI-powered \
                 personalization and intuitive browsing patterns. Increased user engagement \
                 and reduced decision fatigue.",
                &[
                    "UX Research",
                    "Prototyping",
                    "A/B Testing",
                    "Data Visualization",
                    "Interaction Design",
                ],
                "",
                "2019",
                "2020",
            ),
            project(
                "Healthcare App - MediTrack Pro",
                "Designed comprehensive medication management app for elderly patients with \
                 complex health conditions. Features include medication reminders, doctor \
                 communication, and family caregiver dashboard.",
                &[
                    "Healthcare UX",
                    "Accessibility Design",
                    "iOS/Android",
                    "User Testing",
                    "HIPAA Compliance",
                ],
                "https://meditrack-pro.example.com",
                "2017",
                "2018",
            ),
        ],
        certifications: vec![
            certification(
                "Certified UX Professional",
                "Nielsen Norman Group",
                "2020",
                "NN-UXC-2020-SR",
                "",
            ),
            certification(
                "Google Design Certificate",
                "Google Career Certificates",
                "2019",
                "GDC-2019-SR",
                "",
            ),
        ],
        references: vec![
            reference(
                "Maria Santos",
                "VP of Design",
                "Netflix",
                "m.santos@netflix.com",
                "+1 (408) 555-0123",
                "Former Manager",
            ),
            reference(
                "James Wilson",
                "Design Director",
                "IDEO",
                "j.wilson@ideo.com",
                "+1 (650) 555-0124",
                "Former Supervisor",
            ),
        ],
        ..Default::default()
    }
}

fn minimalist_clean() -> Resume {
    Resume {
        template_id: "4".to_string(),
        personal_info: PersonalInfo {
            full_name: "Emma Thompson".to_string(),
            email: opt("emma.thompson@minimal.co"),
            phone: "+1 (555) 456-7890".to_string(),
            address: opt("400 Clean Street"),
            city: opt("Portland"),
            country: opt("United States"),
            postal_code: opt("97205"),
            linkedin: opt("https://linkedin.com/in/emmathompson"),
            github: None,
            website: opt("https://emmathompson.co"),
            summary: opt(
                "Strategic Product Manager with 6+ years building user-focused digital products \
                 from concept to launch. Expertise in agile development, data-driven decision \
                 making, and cross-functional team leadership in fast-paced startup and \
                 enterprise environments.",
            ),
        },
        education: vec![education(
            "Master of Science",
            "Human-Computer Interaction",
            "Stanford University",
            "2016",
            "2018",
            false,
            "3.9",
            "Focus on user research and product design methodology.",
        )],
        experience: vec![experience(
            "Senior Product Manager",
            "Stripe",
            "San Francisco, CA",
            "2021",
            "",
            true,
            "Lead product strategy for payment infrastructure serving millions of businesses globally.",
            &[
                "Launched payment optimization feature increasing conversion by 12%",
                "Managed $50M product line with 8-person cross-functional team",
                "Reduced payment processing time by 40% through API improvements",
            ],
        )],
        skills: vec![
            skill("Product Strategy", "Expert"),
            skill("Agile/Scrum", "Advanced"),
            skill("Data Analysis", "Advanced"),
            skill("User Research", "Intermediate"),
        ],
        languages: vec![
            language("English", "Native"),
            language("French", "Conversational"),
        ],
        projects: vec![project(
            "Payment Gateway Redesign",
            "Led complete redesign of payment infrastructure improving developer experience \
             and reducing integration time by 60%.",
            &["Product Strategy", "API Design", "User Research", "A/B Testing"],
            "",
            "2022",
            "2023",
        )],
        certifications: vec![certification(
            "Certified Product Manager",
            "Product Management Institute",
            "2020",
            "CPM-2020-ET",
            "",
        )],
        references: vec![reference(
            "Michael Chen",
            "VP of Product",
            "Stripe",
            "m.chen@stripe.com",
            "+1 (415) 555-0125",
            "Direct Manager",
        )],
        ..Default::default()
    }
}

fn academic_scholar() -> Resume {
    Resume {
        template_id: "5".to_string(),
        personal_info: PersonalInfo {
            full_name: "Dr. Jonathan Pierce".to_string(),
            email: opt("j.pierce@university.edu"),
            phone: "+1 (555) 567-8901".to_string(),
            address: opt("1000 University Avenue"),
            city: opt("Cambridge"),
            country: opt("United States"),
            postal_code: opt("02138"),
            linkedin: opt("https://linkedin.com/in/jonathanpierce"),
            github: opt("https://github.com/dr-pierce"),
            website: opt("https://jonathanpierce.academia.edu"),
            summary: opt(
                "Distinguished Professor of Computer Science with 15+ years in artificial \
                 intelligence research, machine learning, and computational linguistics. \
                 Published 50+ peer-reviewed papers with 3,000+ citations and $2M+ in research \
                 funding.",
            ),
        },
        education: vec![education(
            "Doctor of Philosophy",
            "Computer Science - Artificial Intelligence",
            "MIT",
            "2006",
            "2011",
            false,
            "4.0",
            "Dissertation: \"Neural Network Approaches to Natural Language Understanding\"",
        )],
        experience: vec![experience(
            "Professor of Computer Science",
            "Harvard University",
            "Cambridge, MA",
            "2018",
            "",
            true,
            "Lead AI research lab, teach graduate and undergraduate courses, mentor PhD students.",
            &[
                "Published 25 papers in top-tier conferences (NIPS, ICML, ACL)",
                "Secured $1.5M NSF grant for natural language processing research",
                "Mentored 15 PhD students, 8 successfully defended dissertations",
            ],
        )],
        skills: vec![
            skill("Machine Learning", "Expert"),
            skill("Python", "Expert"),
            skill("Research Methodology", "Expert"),
            skill("Academic Writing", "Expert"),
        ],
        languages: vec![
            language("English", "Native"),
            language("German", "Proficient"),
        ],
        projects: vec![project(
            "Neural Language Model for Scientific Text",
            "Developed novel neural architecture for understanding and generating scientific \
             literature with 40% improvement in coherence metrics.",
            &["Deep Learning", "NLP", "Transformers", "PyTorch"],
            "https://arxiv.org/paper/12345",
            "2022",
            "2024",
        )],
        certifications: vec![certification(
            "Senior Member",
            "Association for Computing Machinery",
            "2019",
            "ACM-SM-2019-JP",
            "",
        )],
        references: vec![reference(
            "Dr. Sarah Kim",
            "Department Head",
            "Harvard Computer Science",
            "s.kim@harvard.edu",
            "+1 (617) 555-0126",
            "Department Supervisor",
        )],
        ..Default::default()
    }
}

fn legal_professional() -> Resume {
    Resume {
        template_id: "11".to_string(),
        personal_info: PersonalInfo {
            full_name: "Catherine Elizabeth Morrison".to_string(),
            email: opt("c.morrison@morrisonlaw.com"),
            phone: "+1 (555) 123-4567".to_string(),
            address: opt("1200 Legal Plaza, 42nd Floor"),
            city: opt("Chicago"),
            country: opt("United States"),
            postal_code: opt("60601"),
            linkedin: opt("https://linkedin.com/in/catherinemorrison"),
            github: None,
            website: opt("https://morrisonlaw.com"),
            summary: opt(
                "Accomplished Attorney with 12+ years specializing in Corporate Law, Mergers & \
                 Acquisitions, and Securities Regulation. Licensed to practice in Illinois, New \
                 York, and California with extensive experience representing Fortune 500 \
                 companies in complex transactions and regulatory compliance matters.",
            ),
        },
        education: vec![
            education(
                "Juris Doctor",
                "Corporate Law & Securities",
                "Northwestern University Pritzker School of Law",
                "2009",
                "2012",
                false,
                "3.85",
                "Order of the Coif. Northwestern Law Review, Senior Editor. Moot Court National Champions.",
            ),
            education(
                "Bachelor of Arts",
                "Political Science & Economics",
                "University of Chicago",
                "2005",
                "2009",
                false,
                "3.9",
                "Phi Beta Kappa. Magna Cum Laude. Dean's List all semesters.",
            ),
        ],
        experience: vec![
            experience(
                "Senior Partner",
                "Morrison & Associates Law Firm",
                "Chicago, IL",
                "2020",
                "",
                true,
                "Lead corporate law practice specializing in M&A transactions, securities \
                 offerings, and regulatory compliance for mid-market and Fortune 500 companies \
                 across technology, healthcare, and financial services sectors.",
                &[
                    "Closed over $2.5B in M&A transactions representing both buyers and sellers",
                    "Successfully defended clients in 15+ SEC enforcement actions with zero penalties",
                    "Led IPO counsel for 8 companies raising over $800M in capital",
                    "Recognized as \"Lawyer of the Year\" by Best Lawyers in America 2023",
                ],
            ),
            experience(
                "Senior Associate",
                "Kirkland & Ellis LLP",
                "Chicago, IL",
                "2016",
                "2020",
                false,
                "Specialized in complex corporate transactions, private equity deals, and \
                 securities law compliance for major institutional clients and high-growth \
                 companies.",
                &[
                    "Participated in $5B+ worth of private equity and M&A transactions",
                    "Drafted and negotiated complex acquisition agreements and securities filings",
                    "Provided regulatory guidance for 20+ IPOs and secondary offerings",
                    "Mentored junior associates and summer law students",
                ],
            ),
            experience(
                "Associate Attorney",
                "Latham & Watkins LLP",
                "New York, NY",
                "2012",
                "2016",
                false,
                "Corporate law practice focusing on venture capital financing, technology \
                 transactions, and emerging company representation in fast-paced startup \
                 environment.",
                &[
                    "Advised 50+ startups through Series A-C funding rounds totaling $300M+",
                    "Structured and documented complex licensing and joint venture agreements",
                    "Achieved 98% client retention rate through responsive service delivery",
                ],
            ),
        ],
        skills: vec![
            skill("Corporate Law", "Expert"),
            skill("Mergers & Acquisitions", "Expert"),
            skill("Securities Regulation", "Expert"),
            skill("Contract Negotiation", "Expert"),
            skill("Due Diligence", "Advanced"),
            skill("Regulatory Compliance", "Expert"),
            skill("Private Equity", "Advanced"),
            skill("IPO Counsel", "Advanced"),
            skill("Legal Research", "Expert"),
            skill("Client Relations", "Expert"),
        ],
        languages: vec![
            language("English", "Native"),
            language("French", "Proficient"),
            language("Spanish", "Conversational"),
        ],
        projects: vec![
            project(
                "TechUnicorn IPO - $400M Public Offering",
                "Served as lead counsel for high-profile technology company IPO, managing all \
                 aspects from S-1 preparation through successful NASDAQ listing. Coordinated \
                 with underwriters, auditors, and regulators throughout 8-month process.",
                &["Securities Law", "IPO Process", "NASDAQ Listing", "Regulatory Filings"],
                "",
                "2022",
                "2023",
            ),
            project(
                "Cross-Border M&A - $1.2B Acquisition",
                "Led legal team for complex cross-border acquisition involving US technology \
                 company acquiring European competitor. Managed regulatory approvals across 3 \
                 jurisdictions and complex tax structuring.",
                &["M&A", "Cross-Border Transactions", "Antitrust Law", "Tax Structuring"],
                "",
                "2021",
                "2022",
            ),
            project(
                "Private Equity Fund Formation - $500M Fund",
                "Advised private equity firm on formation of new $500M growth equity fund, \
                 including fund documentation, regulatory compliance, and LP negotiations with \
                 institutional investors.",
                &[
                    "Private Equity",
                    "Fund Formation",
                    "Investment Management",
                    "Regulatory Compliance",
                ],
                "",
                "2020",
                "2021",
            ),
        ],
        certifications: vec![
            certification(
                "Licensed Attorney - Illinois",
                "Illinois State Bar Association",
                "2012",
                "IL-BAR-2012-CEM",
                "",
            ),
            certification(
                "Licensed Attorney - New York",
                "New York State Bar Association",
                "2013",
                "NY-BAR-2013-CEM",
                "",
            ),
        ],
        references: vec![
            reference(
                "Hon. Margaret Thompson",
                "Federal Judge",
                "US District Court Northern District of Illinois",
                "m.thompson@ilnd.uscourts.gov",
                "+1 (312) 435-5678",
                "Former Law Clerk Supervisor",
            ),
            reference(
                "David Richardson",
                "Managing Partner",
                "Kirkland & Ellis LLP",
                "d.richardson@kirkland.com",
                "+1 (312) 862-2000",
                "Former Supervisor",
            ),
        ],
        ..Default::default()
    }
}

/// Generic placeholder record returned on a table miss.
fn generic() -> Resume {
    Resume {
        template_id: "1".to_string(),
        personal_info: PersonalInfo {
            full_name: "Your Name".to_string(),
            email: opt("your.email@example.com"),
            phone: "+1 (555) 123-4567".to_string(),
            address: opt("123 Main Street"),
            city: opt("Your City"),
            country: opt("Your Country"),
            postal_code: opt("12345"),
            linkedin: opt("https://linkedin.com/in/yourname"),
            github: opt("https://github.com/yourname"),
            website: opt("https://yourwebsite.com"),
            summary: opt(
                "Write a compelling professional summary that highlights your key skills and \
                 career objectives.",
            ),
        },
        education: vec![education(
            "Your Degree",
            "Your Field of Study",
            "University Name",
            "2018",
            "2022",
            false,
            "3.8",
            "Relevant coursework, honors, or achievements.",
        )],
        experience: vec![experience(
            "Your Job Title",
            "Company Name",
            "City, State",
            "2022",
            "",
            true,
            "Describe your role and responsibilities in this position.",
            &[
                "Key achievement or accomplishment",
                "Another significant contribution",
                "Quantified result or impact",
            ],
        )],
        skills: vec![
            skill("Technical Skill", "Advanced"),
            skill("Software Tool", "Expert"),
            skill("Industry Knowledge", "Intermediate"),
        ],
        languages: vec![
            language("English", "Native"),
            language("Second Language", "Conversational"),
        ],
        projects: vec![project(
            "Project Name",
            "Brief description of the project and your role.",
            &["Technology 1", "Technology 2", "Technology 3"],
            "https://project-link.com",
            "2023",
            "2023",
        )],
        certifications: vec![certification(
            "Certification Name",
            "Issuing Organization",
            "2023",
            "CERT-123",
            "https://certification-link.com",
        )],
        references: vec![reference(
            "Reference Name",
            "Their Position",
            "Their Company",
            "reference@email.com",
            "+1 (555) 987-6543",
            "Professional Relationship",
        )],
        ..Default::default()
    }
}

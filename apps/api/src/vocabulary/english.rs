use super::{FieldLabels, Messages, Placeholders, SectionKeywords, Seniority, Tables};

pub(super) fn tables() -> Tables {
    Tables {
        placeholders: Placeholders {
            title: "Unknown Position",
            company: "Unknown Company",
            not_specified: "Not specified",
        },
        labels: FieldLabels {
            title: &[r"job\s+title", r"position\s+title", "title", "position", "role"],
            company: &["company", "employer", r"organi[sz]ation"],
            location: &["location", r"place\s+of\s+work", "city"],
            salary: &[r"salary\s+range", "salary", "compensation", r"pay\s+range"],
            education: &["education", r"degree\s+required", "degree"],
            job_type: &[r"employment\s+type", r"job\s+type", r"contract\s+type", "employment"],
        },
        location_phrases: &["based in", "located in", "office in"],
        company_lead_words: &["at", "join"],
        sections: SectionKeywords {
            description: &[
                "job description",
                "description",
                "about the role",
                "about the job",
                "your role",
                "responsibilities",
                "what you'll do",
                "what you will do",
            ],
            requirements: &[
                "requirements",
                "qualifications",
                "what you bring",
                "what we're looking for",
                "what we are looking for",
                "must have",
                "your profile",
                "skills",
            ],
            benefits: &["benefits", "what we offer", "we offer", "perks", "why join us"],
        },
        remote_keywords: &[
            "remote",
            "work from home",
            "working from home",
            "wfh",
            "home office",
            "distributed team",
            "telecommute",
        ],
        job_types: &[
            ("full-time", "Full-time"),
            ("full time", "Full-time"),
            ("part-time", "Part-time"),
            ("part time", "Part-time"),
            ("internship", "Internship"),
            ("freelance", "Freelance"),
            ("contract", "Contract"),
            ("temporary", "Temporary"),
        ],
        education_keywords: &[
            "bachelor",
            "master",
            "phd",
            "ph.d",
            "degree",
            "diploma",
            "university",
        ],
        seniority: Seniority {
            junior_keywords: &["entry level", "entry-level", "junior", "graduate"],
            senior_keywords: &["senior", "lead", "principal"],
            junior_label: "0-2 years",
            senior_label: "5+ years",
            years_unit: "years",
        },
        years_words: r"years?|yrs?",
        experience_words: "experience",
        minimum_words: r"minimum|at\s+least",
        ats_keywords: &[
            // technical
            "javascript",
            "typescript",
            "python",
            "java",
            "react",
            "node.js",
            "sql",
            "aws",
            "docker",
            "kubernetes",
            "git",
            "api",
            "agile",
            "scrum",
            "machine learning",
            "data analysis",
            "cloud",
            "ci/cd",
            "microservices",
            "testing",
            // soft skills
            "leadership",
            "communication",
            "teamwork",
            "problem solving",
            "collaboration",
            "project management",
            "time management",
            "analytical",
            "creative",
            "adaptable",
            "detail-oriented",
            "mentoring",
            "stakeholder",
            // action verbs
            "developed",
            "managed",
            "led",
            "designed",
            "implemented",
            "created",
            "improved",
            "increased",
            "reduced",
            "delivered",
            "launched",
            "optimized",
            "built",
            "achieved",
            "coordinated",
            "analyzed",
            "automated",
        ],
        stopwords: &[
            "the", "and", "with", "for", "we", "you", "is", "are", "our", "to", "of", "in", "on",
            "will", "or", "as", "be", "your",
        ],
        messages: Messages {
            missing_skills: "Consider highlighting any experience with {skills} if you have it",
            emphasize_skills: "Emphasize your {skills} expertise prominently in your resume",
            remote_experience: "This position offers remote work, mention any remote work experience",
            tailored_summary: "Experienced professional applying for the {title} position at {company} with a {score}% skill match.",

            keywords_recommendation: "Add more industry-relevant keywords and action verbs to your resume",
            formatting_recommendation: "Simplify formatting: avoid tabs, repeated spaces and unusual characters",
            structure_recommendation: "Complete the missing sections: contact details, summary, experience, education and skills",
            length_expand_recommendation: "Expand your resume with more detail on your experience and achievements",
            length_condense_recommendation: "Condense your resume to the most relevant information",
            readability_recommendation: "Use shorter sentences and simpler wording to improve readability",

            keywords_strength: "Strong use of relevant keywords",
            formatting_strength: "Clean, ATS-friendly formatting",
            structure_strength: "Complete and well-structured resume",
            length_strength: "Optimal resume length",
            readability_strength: "Clear and readable writing",

            keywords_weakness: "Low keyword coverage",
            formatting_weakness: "Formatting may confuse applicant tracking systems",
            structure_weakness: "Important resume sections are missing",
            length_weakness: "Resume length is far from the recommended range",
            readability_weakness: "Text is hard to read",

            add_summary: "Add a professional summary that highlights your key qualifications",
            add_skills: "Add a dedicated skills section listing your technical and soft skills",
            raise_score: "Work through the ATS recommendations to raise your score above 70",
            quantify_achievements: "Quantify your achievements with numbers, percentages or amounts",
        },
    }
}

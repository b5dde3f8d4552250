use super::{FieldLabels, Messages, Placeholders, SectionKeywords, Seniority, Tables};

pub(super) fn tables() -> Tables {
    Tables {
        placeholders: Placeholders {
            title: "Unbekannte Position",
            company: "Unbekanntes Unternehmen",
            not_specified: "Nicht angegeben",
        },
        labels: FieldLabels {
            title: &["stellenbezeichnung", "stellentitel", "position", "jobtitel", "titel"],
            company: &["unternehmen", "firma", "arbeitgeber"],
            location: &["standort", "arbeitsort", "einsatzort", "ort"],
            salary: &["jahresgehalt", "gehalt", "vergütung"],
            education: &["ausbildung", "abschluss", "studium"],
            job_type: &["anstellungsart", "beschäftigungsart", "vertragsart", "arbeitszeit"],
        },
        location_phrases: &["mit sitz in", "ansässig in", "standort in"],
        company_lead_words: &["bei", "für"],
        sections: SectionKeywords {
            description: &[
                "stellenbeschreibung",
                "beschreibung",
                "deine aufgaben",
                "ihre aufgaben",
                "aufgaben",
                "über die stelle",
                "die rolle",
            ],
            requirements: &[
                "anforderungen",
                "qualifikationen",
                "ihr profil",
                "dein profil",
                "was du mitbringst",
                "was sie mitbringen",
                "voraussetzungen",
            ],
            benefits: &["was wir bieten", "wir bieten", "benefits", "vorteile", "unser angebot"],
        },
        remote_keywords: &[
            "remote",
            "homeoffice",
            "home-office",
            "home office",
            "mobiles arbeiten",
            "von zu hause",
            "fernarbeit",
        ],
        job_types: &[
            ("vollzeit", "Vollzeit"),
            ("teilzeit", "Teilzeit"),
            ("werkstudent", "Werkstudent"),
            ("praktikum", "Praktikum"),
            ("freiberuflich", "Freiberuflich"),
            ("befristet", "Befristet"),
            ("festanstellung", "Festanstellung"),
        ],
        education_keywords: &[
            "bachelor",
            "master",
            "promotion",
            "studium",
            "hochschule",
            "universität",
            "ausbildung",
            "abschluss",
        ],
        seniority: Seniority {
            junior_keywords: &["berufseinsteiger", "einsteiger", "junior", "absolvent"],
            senior_keywords: &["senior", "lead", "teamleitung", "leitung"],
            junior_label: "0-2 Jahre",
            senior_label: "5+ Jahre",
            years_unit: "Jahre",
        },
        years_words: r"jahre?n?",
        experience_words: r"\w*erfahrung",
        minimum_words: r"mindestens|minimum",
        ats_keywords: &[
            // technisch
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
            "agil",
            "scrum",
            "machine learning",
            "datenanalyse",
            "cloud",
            "ci/cd",
            "microservices",
            "testing",
            // soziale kompetenzen
            "führung",
            "kommunikation",
            "teamfähigkeit",
            "problemlösung",
            "zusammenarbeit",
            "projektmanagement",
            "zeitmanagement",
            "analytisch",
            "kreativ",
            "flexibel",
            "selbstständig",
            "verantwortung",
            "kundenorientierung",
            // verben
            "entwickelt",
            "geleitet",
            "verwaltet",
            "konzipiert",
            "implementiert",
            "erstellt",
            "verbessert",
            "gesteigert",
            "reduziert",
            "umgesetzt",
            "eingeführt",
            "optimiert",
            "aufgebaut",
            "erreicht",
            "koordiniert",
            "analysiert",
            "automatisiert",
        ],
        stopwords: &[
            "und", "der", "die", "das", "mit", "für", "wir", "sie", "ist", "ein", "eine", "nicht",
            "auf", "bei", "zu", "von", "den", "dem", "auch", "oder", "ihre", "deine",
        ],
        messages: Messages {
            missing_skills: "Heben Sie Erfahrung mit {skills} hervor, falls vorhanden",
            emphasize_skills: "Stellen Sie Ihre Kenntnisse in {skills} deutlich heraus",
            remote_experience: "Die Stelle bietet Remote-Arbeit, erwähnen Sie Ihre Erfahrung damit",
            tailored_summary: "Erfahrene Fachkraft mit Interesse an der Position {title} bei {company} und einer Übereinstimmung der Fähigkeiten von {score}%.",

            keywords_recommendation: "Ergänzen Sie branchenrelevante Schlüsselwörter und aussagekräftige Verben",
            formatting_recommendation: "Vereinfachen Sie die Formatierung: keine Tabulatoren, Mehrfachleerzeichen oder Sonderzeichen",
            structure_recommendation: "Vervollständigen Sie fehlende Abschnitte: Kontaktdaten, Profil, Berufserfahrung, Ausbildung und Kenntnisse",
            length_expand_recommendation: "Beschreiben Sie Ihre Erfahrungen und Erfolge ausführlicher",
            length_condense_recommendation: "Kürzen Sie Ihren Lebenslauf auf die relevantesten Informationen",
            readability_recommendation: "Verwenden Sie kürzere Sätze und einfachere Formulierungen",

            keywords_strength: "Gute Verwendung relevanter Schlüsselwörter",
            formatting_strength: "Saubere, ATS-freundliche Formatierung",
            structure_strength: "Vollständiger und gut strukturierter Lebenslauf",
            length_strength: "Optimale Länge des Lebenslaufs",
            readability_strength: "Klare und gut lesbare Formulierungen",

            keywords_weakness: "Geringe Abdeckung relevanter Schlüsselwörter",
            formatting_weakness: "Die Formatierung kann Bewerbermanagementsysteme verwirren",
            structure_weakness: "Wichtige Abschnitte fehlen",
            length_weakness: "Die Länge weicht stark vom empfohlenen Bereich ab",
            readability_weakness: "Der Text ist schwer lesbar",

            add_summary: "Fügen Sie ein Kurzprofil mit Ihren wichtigsten Qualifikationen hinzu",
            add_skills: "Fügen Sie einen Abschnitt mit Ihren fachlichen und persönlichen Kenntnissen hinzu",
            raise_score: "Setzen Sie die ATS-Empfehlungen um, um Ihren Wert über 70 zu heben",
            quantify_achievements: "Belegen Sie Ihre Erfolge mit Zahlen, Prozentwerten oder Beträgen",
        },
    }
}

//! Fixed vocabularies shared by the annotator and the checks.
//!
//! Every set is built once on first use and is read-only afterwards.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Action verb lemmas recognized at the start of accomplishment statements.
pub static ACTION_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "accelerate", "achieve", "acquire", "adapt", "administer", "advance", "advise",
        "advocate", "aid", "allocate", "analyze", "anticipate", "apply", "appraise", "approve",
        "arbitrate", "arrange", "articulate", "assemble", "assess", "assign", "assist", "attain",
        "audit", "augment", "author", "authorize", "automate", "award",
        "balance", "benchmark", "boost", "brief", "broaden", "budget", "build",
        "calculate", "catalog", "centralize", "chair", "champion", "change", "clarify",
        "classify", "coach", "code", "collaborate", "collect", "combine", "comfort", "command",
        "communicate", "compare", "compile", "complete", "compose", "compute", "conceive",
        "conceptualize", "condense", "conduct", "configure", "conserve", "consolidate",
        "construct", "consult", "contact", "contribute", "control", "convert", "convince",
        "cooperate", "coordinate", "correct", "correspond", "counsel", "create", "critique",
        "cultivate", "customize", "cut",
        "debug", "decentralize", "decrease", "dedicate", "deduce", "define", "delegate",
        "deliver", "demonstrate", "design", "detect", "determine", "develop", "devise",
        "diagnose", "differentiate", "direct", "discipline", "discover", "dispense", "display",
        "disprove", "dissect", "distribute", "diversify", "document", "double", "draft",
        "dramatize",
        "earn", "edit", "educate", "effect", "elicit", "eliminate", "enable", "encourage",
        "endorse", "engineer", "enhance", "enlarge", "enlist", "ensure", "entertain",
        "establish", "estimate", "evaluate", "examine", "exceed", "execute", "exercise",
        "exhibit", "expand", "expedite", "experiment", "explain", "explore", "express", "extend",
        "extract",
        "fabricate", "facilitate", "familiarize", "fashion", "file", "finance", "fix", "focus",
        "forecast", "formalize", "form", "formulate", "foster", "found", "frame", "fulfill",
        "function", "furnish",
        "gain", "gather", "gauge", "generate", "govern", "grade", "grant", "greet", "group",
        "grow", "guide",
        "halve", "handle", "harmonize", "harness", "head", "help", "hire", "host", "hypothesize",
        "identify", "ignite", "illustrate", "imagine", "implement", "improve", "improvise",
        "inaugurate", "incorporate", "increase", "index", "indicate", "individualize", "induce",
        "influence", "inform", "initiate", "innovate", "inspect", "inspire", "install",
        "instigate", "institute", "instruct", "insure", "integrate", "intensify", "interact",
        "interpret", "interview", "introduce", "invent", "inventory", "invest", "investigate",
        "involve", "isolate", "issue",
        "join", "judge", "justify",
        "keep",
        "launch", "learn", "lecture", "lead", "license", "listen", "lobby", "localize", "locate",
        "log",
        "machine", "make", "maintain", "manage", "manipulate", "manufacture", "map", "market",
        "master", "maximize", "measure", "mediate", "mentor", "merge", "meet", "minimize",
        "mobilize", "model", "moderate", "modernize", "modify", "mold", "monitor", "motivate",
        "move", "multiply",
        "narrate", "navigate", "negotiate", "network", "neutralize", "nominate", "normalize",
        "notify", "nurture",
        "observe", "obtain", "offer", "offset", "open", "operate", "optimize", "orchestrate",
        "order", "organize", "orient", "originate", "outline", "overcome", "overhaul", "oversee",
        "package", "paint", "participate", "partner", "patent", "perceive", "perform",
        "persuade", "phase", "photograph", "pilot", "pinpoint", "pioneer", "place", "plan",
        "play", "poll", "popularize", "position", "predict", "prepare", "prescribe", "present",
        "preserve", "preside", "prevent", "print", "prioritize", "probe", "process", "procure",
        "produce", "profile", "program", "project", "promote", "proofread", "propose",
        "protect", "prove", "provide", "publicize", "publish", "pull", "purchase", "pursue",
        "qualify", "quantify", "query", "question", "quote",
        "raise", "rally", "run", "rank", "rate", "reach", "read", "realign", "rebuild",
        "receive", "recognize", "recommend", "reconcile", "reconstruct", "record", "recover",
        "recruit", "rectify", "redesign", "reduce", "reengineer", "refer", "refine", "refocus",
        "reform", "regulate", "rehabilitate", "reinforce", "reinstate", "relate", "relay",
        "release", "relieve", "remediate", "remodel", "render", "renegotiate", "renovate",
        "reorganize", "repair", "replace", "replenish", "replicate", "report", "represent",
        "reprogram", "research", "reshape", "resolve", "respond", "restore", "restructure",
        "result", "retain", "retool", "retrieve", "revamp", "reverse", "review", "revise",
        "revitalize", "reward", "route",
        "safeguard", "salvage", "save", "scan", "schedule", "scheme", "screen", "script",
        "scrutinize", "sculpt", "search", "secure", "segment", "select", "separate", "sequence",
        "serve", "service", "set", "settle", "shape", "share", "sharpen", "ship", "shorten",
        "showcase", "shrink", "simplify", "simulate", "sketch", "sell", "solidify", "solve",
        "sort", "seek", "spark", "spearhead", "specialize", "specify", "speculate", "speak",
        "sponsor", "stabilize", "staff", "stage", "standardize", "start", "steer", "stimulate",
        "stop", "strategize", "streamline", "strengthen", "stress", "stretch", "structure",
        "study", "submit", "substitute", "succeed", "suggest", "summarize", "supersede",
        "supervise", "supply", "support", "surpass", "survey", "sustain", "symbolize",
        "synchronize", "synthesize", "systematize",
        "tabulate", "tackle", "tailor", "target", "teach", "team", "terminate", "test",
        "testify", "tighten", "time", "trace", "track", "trade", "train", "transact",
        "transcribe", "transfer", "transform", "translate", "transmit", "transport", "travel",
        "treat", "trim", "triple", "troubleshoot", "tutor", "type",
        "uncover", "underline", "understand", "undertake", "underwrite", "unearth", "unify",
        "unite", "unravel", "update", "upgrade", "uphold", "utilize",
        "vacate", "validate", "value", "verbalize", "verify", "view", "vindicate", "visit",
        "visualize", "voice", "volunteer", "vote",
        "waive", "walk", "weigh", "welcome", "widen", "witness", "win", "work", "write",
        "yield", "zone",
    ]
    .into_iter()
    .collect()
});

/// Single-word achievement terms, in both the listed inflected form and lemma form.
pub static ACHIEVEMENT_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "increased", "decreased", "achieved", "reduced", "grew", "improved", "optimized",
        "saved", "generated", "delivered", "completed", "exceeded", "streamlined",
        "increase", "decrease", "achieve", "reduce", "grow", "improve", "optimize", "save",
        "generate", "deliver", "complete", "exceed", "streamline",
    ]
    .into_iter()
    .collect()
});

/// Two-word achievement phrases, matched on adjacent tokens.
pub const ACHIEVEMENT_PHRASES: &[(&str, &str)] = &[("led", "to"), ("resulted", "in")];

/// Tokens that mark a quantity even when they are not numbers themselves.
pub const QUANTITY_MARKERS: &[&str] = &["%", "$", "€", "£", "k", "m", "usd", "eur"];

/// Technology and tool keywords recognized by the skills check.
pub const TECH_SKILLS: &[&str] = &[
    "python", "java", "c++", "c#", "javascript", "typescript", "html", "css", "scss", "sass",
    "php", "ruby", "go", "swift", "kotlin", "rust", "scala",
    "sql", "mysql", "postgresql", "mongodb", "nosql", "sqlite", "oracle", "sql server",
    "cassandra", "redis",
    "react", "react.js", "angular", "angular.js", "vue", "vue.js", "next.js", "node.js",
    "express", "express.js", "django", "flask", "spring", "spring boot", ".net", "asp.net",
    "laravel", "ruby on rails",
    "aws", "azure", "gcp", "google cloud", "amazon web services", "docker", "kubernetes", "k8s",
    "terraform", "ansible", "jenkins", "gitlab ci", "ci/cd", "devops",
    "linux", "unix", "windows server", "macos", "bash", "powershell",
    "machine learning", "ml", "data analysis", "data science", "artificial intelligence", "ai",
    "deep learning", "natural language processing", "nlp",
    "pandas", "numpy", "scipy", "scikit-learn", "sklearn", "tensorflow", "keras", "pytorch",
    "matplotlib", "seaborn", "jupyter",
    "git", "github", "gitlab", "bitbucket", "jira", "confluence", "agile", "scrum", "kanban",
    "autocad", "solidworks", "revit", "matlab", "excel", "vba", "tableau", "power bi", "qlik",
    "sap", "oracle erp", "salesforce", "crm", "erp",
    "photoshop", "illustrator", "figma", "sketch", "adobe xd", "ui/ux",
    "cybersecurity", "penetration testing", "network security", "cryptography",
];

/// Single-word skill keywords, matched against token lemmas.
pub static TECH_SKILL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    TECH_SKILLS
        .iter()
        .copied()
        .filter(|s| !is_phrase_keyword(s))
        .collect()
});

/// Multi-word or symbol-bearing skill keywords, matched as substrings.
pub static TECH_SKILL_PHRASES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    TECH_SKILLS
        .iter()
        .copied()
        .filter(|s| is_phrase_keyword(s))
        .collect()
});

fn is_phrase_keyword(keyword: &str) -> bool {
    keyword.chars().any(|c| !c.is_alphanumeric())
}

/// Common verbs outside the action list that the annotator still tags as verbs.
pub static COMMON_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "accept", "add", "allow", "ask", "become", "begin", "believe", "bring", "buy", "call",
        "care", "carry", "cause", "check", "choose", "come", "consider", "continue", "cover",
        "deal", "decide", "describe", "drive", "enjoy", "enter", "expect", "face", "fail",
        "fall", "feel", "fill", "find", "finish", "fly", "follow", "get", "give", "go",
        "happen", "hear", "hold", "hope", "include", "keep", "know", "last", "leave", "let",
        "like", "live", "look", "lose", "love", "mean", "mention", "miss", "need", "note",
        "own", "pass", "pay", "pick", "plan", "prefer", "put", "reflect", "remain", "remember",
        "require", "rest", "return", "rise", "say", "see", "seem", "send", "show", "sit",
        "spend", "stand", "stay", "take", "talk", "tell", "tend", "think", "try", "turn",
        "use", "wait", "want", "watch", "wish",
    ]
    .into_iter()
    .collect()
});

/// English number and ordinal words treated as numeric-like tokens.
pub static NUMBER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
        "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
        "eighty", "ninety", "hundred", "thousand", "million", "billion", "trillion",
        "quadrillion", "gajillion", "bazillion",
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
        "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
        "seventeenth", "eighteenth", "nineteenth", "twentieth", "thirtieth", "fortieth",
        "fiftieth", "sixtieth", "seventieth", "eightieth", "ninetieth", "hundredth",
        "thousandth", "millionth", "billionth", "trillionth",
    ]
    .into_iter()
    .collect()
});

/// Whether `lemma` is tagged as a verb by the built-in annotator.
pub fn is_verb_lemma(lemma: &str) -> bool {
    ACTION_VERBS.contains(lemma) || COMMON_VERBS.contains(lemma) || ACHIEVEMENT_TERMS.contains(lemma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_keywords_split_by_shape() {
        assert!(TECH_SKILL_WORDS.contains("python"));
        assert!(TECH_SKILL_WORDS.contains("k8s"));
        assert!(!TECH_SKILL_WORDS.contains("c++"));
        assert!(TECH_SKILL_PHRASES.contains(&"c++"));
        assert!(TECH_SKILL_PHRASES.contains(&"machine learning"));
        assert!(TECH_SKILL_PHRASES.contains(&"scikit-learn"));
        assert_eq!(
            TECH_SKILL_WORDS.len() + TECH_SKILL_PHRASES.len(),
            TECH_SKILLS.len()
        );
    }

    #[test]
    fn test_action_verbs_are_lemmas() {
        assert!(ACTION_VERBS.contains("manage"));
        assert!(ACTION_VERBS.contains("lead"));
        assert!(!ACTION_VERBS.contains("managed"));
        assert!(ACTION_VERBS.len() > 500);
    }

    #[test]
    fn test_is_verb_lemma() {
        assert!(is_verb_lemma("spearhead"));
        assert!(is_verb_lemma("use"));
        assert!(is_verb_lemma("increased"));
        assert!(!is_verb_lemma("python"));
    }
}

//! Static word lists backing the rule-based English tagger.
//!
//! Closed-class words are enumerated exhaustively; the open-class verb list
//! covers common English verbs plus the vocabulary of biomedical abstracts,
//! which is where this crate spends its time. Inflected forms are not listed:
//! the tagger derives them by suffix analysis validated against these base
//! forms, with the irregular table handling the rest.

/// Irregular verb surface forms mapped to their lemma. Auxiliary forms are
/// included so "was" and friends still lemmatize to "be" even though the
/// tagger classifies them as `Aux` rather than `Verb`.
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("arose", "arise"),
    ("arisen", "arise"),
    ("ate", "eat"),
    ("became", "become"),
    ("been", "be"),
    ("began", "begin"),
    ("begun", "begin"),
    ("being", "be"),
    ("bent", "bend"),
    ("bit", "bite"),
    ("bitten", "bite"),
    ("bled", "bleed"),
    ("blew", "blow"),
    ("blown", "blow"),
    ("bore", "bear"),
    ("born", "bear"),
    ("borne", "bear"),
    ("bound", "bind"),
    ("bought", "buy"),
    ("bred", "breed"),
    ("broke", "break"),
    ("broken", "break"),
    ("brought", "bring"),
    ("built", "build"),
    ("came", "come"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("dealt", "deal"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("drank", "drink"),
    ("drawn", "draw"),
    ("drew", "draw"),
    ("driven", "drive"),
    ("drove", "drive"),
    ("drunk", "drink"),
    ("fed", "feed"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("felt", "feel"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("fought", "fight"),
    ("found", "find"),
    ("froze", "freeze"),
    ("frozen", "freeze"),
    ("gave", "give"),
    ("given", "give"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("had", "have"),
    ("has", "have"),
    ("heard", "hear"),
    ("held", "hold"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("is", "be"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("laid", "lay"),
    ("lain", "lie"),
    ("led", "lead"),
    ("left", "leave"),
    ("lent", "lend"),
    ("lit", "light"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("ran", "run"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("said", "say"),
    ("sank", "sink"),
    ("sat", "sit"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("shaken", "shake"),
    ("shook", "shake"),
    ("shone", "shine"),
    ("shot", "shoot"),
    ("showed", "show"),
    ("shown", "show"),
    ("shrank", "shrink"),
    ("shrunk", "shrink"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("sought", "seek"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("stood", "stand"),
    ("struck", "strike"),
    ("stuck", "stick"),
    ("sunk", "sink"),
    ("swam", "swim"),
    ("swum", "swim"),
    ("taken", "take"),
    ("taught", "teach"),
    ("thought", "think"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("told", "tell"),
    ("took", "take"),
    ("tore", "tear"),
    ("torn", "tear"),
    ("underwent", "undergo"),
    ("undergone", "undergo"),
    ("understood", "understand"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("withdrawn", "withdraw"),
    ("withdrew", "withdraw"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("won", "win"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("wrote", "write"),
];

/// Base-form verbs. Checked both for bare surface forms and as the
/// validation set for suffix-stripped candidates.
pub const BASE_VERBS: &[&str] = &[
    "accelerate", "accept", "accompany", "account", "achieve", "acquire",
    "act", "activate", "adapt", "add", "address", "adjust", "administer",
    "admit", "adopt", "advance", "affect", "aid", "aim", "allow", "alter",
    "analyze", "appear", "apply", "approach", "arise", "arrest", "ask",
    "assess", "assign", "associate", "assume", "attach", "attack", "attempt",
    "attenuate", "avoid", "base", "be", "bear", "become", "begin", "behave",
    "believe", "bend", "benefit", "bind", "bite", "bleed", "block", "blow",
    "boost",
    "break", "breed", "bring", "build", "buy", "calculate", "call", "carry",
    "catch", "cause", "change", "characterize", "choose", "circulate",
    "claim", "classify", "cluster", "colonize", "combine", "come", "compare",
    "complete", "comprise", "compute", "conclude", "conduct", "confer",
    "confirm", "consider", "consist", "constitute", "contain", "continue",
    "contribute", "control", "convert", "correlate", "correspond",
    "counteract", "create", "damage", "deal", "decline", "decrease",
    "define", "degrade", "delay", "delete", "deliver", "demonstrate",
    "depend", "derive", "describe", "destroy", "detect", "determine",
    "develop", "die", "differ", "differentiate", "diffuse", "diminish",
    "direct", "disappear", "discover", "discuss", "disrupt", "disseminate",
    "distinguish", "distribute", "divide", "do", "dominate", "double",
    "downregulate", "draw", "drink", "drive", "eat", "elevate", "eliminate",
    "elucidate", "emerge", "employ", "enable", "encode", "encompass",
    "enhance", "enroll", "enter", "establish", "estimate", "evade", "evaluate",
    "evolve", "examine", "exceed", "exert", "exhibit", "exist", "expand",
    "expect", "experience", "explain", "explore", "expose", "express",
    "extend", "extract", "facilitate", "fail", "fall", "favor", "feature",
    "feed", "feel", "fight", "find", "fly", "focus", "follow", "forget",
    "form", "freeze", "fuel", "function", "generate", "get", "give", "go",
    "govern", "grow", "halt", "hamper", "happen", "harbor", "have", "heal",
    "hear", "help", "hide", "highlight", "hinder", "hold", "identify",
    "illustrate", "impair", "impede", "implicate", "imply", "improve",
    "include", "incorporate", "increase", "indicate", "induce", "infect",
    "infiltrate", "influence", "inform", "inhibit", "initiate", "injure",
    "integrate", "interact", "interfere", "interrupt", "invade",
    "investigate", "involve", "keep", "kill", "know", "lack", "lay", "lead",
    "learn", "leave", "lend", "let", "lie", "light", "limit", "link", "live",
    "localize", "look", "lose", "lower", "maintain", "make", "manage",
    "manifest", "mark", "mask", "mean", "measure", "mediate", "meet",
    "metastasize", "migrate", "mimic", "mitigate", "modify", "modulate",
    "monitor", "move", "multiply", "mutate", "necessitate", "need", "note",
    "obtain", "occur", "offer", "open", "operate", "oppose", "originate",
    "overcome", "overexpress", "participate", "pay", "penetrate", "perform",
    "persist", "perturb", "play", "point", "possess", "precede", "predict",
    "present", "prevent", "proceed", "produce", "progress", "proliferate",
    "promote", "propagate", "propose", "protect", "prove", "provide",
    "reach", "react", "receive", "recognize", "recommend", "recur", "reduce",
    "refer", "reflect", "regenerate", "regress", "regulate", "reinforce",
    "relate", "release", "rely", "remain", "remodel", "remove", "repair",
    "replace", "replicate", "report", "represent", "require", "rescue",
    "resemble", "resist", "resolve", "respond", "restore", "restrict",
    "result", "retain", "reveal", "reverse", "review", "rise", "run", "say",
    "screen", "secrete", "see", "seek", "seem", "select", "sell", "send",
    "sense", "sequester", "serve", "shake", "shape", "share", "shed",
    "shift", "shine", "shoot", "show", "shrink", "signal", "sink", "sit",
    "sleep", "slow", "spare", "speak", "specify", "spend", "spread",
    "stabilize", "stain", "stand", "start", "stay", "steal", "stem",
    "stick", "stimulate", "stop", "strengthen", "strike", "study", "submit",
    "suffer", "suggest", "summarize", "support", "suppress", "surround",
    "survive", "sustain", "swim", "switch", "synthesize", "take", "target",
    "teach", "tear", "tell", "test", "think", "thrive", "throw", "tolerate",
    "track", "transform", "translate", "transmit", "treat", "trigger",
    "try", "turn", "undergo", "underlie", "underpin", "understand",
    "upregulate", "use", "utilize", "validate", "vary", "verify", "wake",
    "wane", "warrant", "weaken", "wear", "widen", "win", "withdraw", "work",
    "worsen", "write", "yield",
];

/// Auxiliary and modal verb surfaces. These never count as content verbs:
/// a window containing only "is" or "may" yields no occurrence.
pub const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "can", "could", "did", "do", "does",
    "had", "has", "have", "is", "may", "might", "must", "shall", "should",
    "was", "were", "will", "would",
];

pub const DETERMINERS: &[&str] = &[
    "a", "an", "another", "any", "both", "each", "either", "every",
    "neither", "no", "some", "that", "the", "these", "this", "those",
];

pub const PRONOUNS: &[&str] = &[
    "he", "her", "hers", "him", "his", "i", "it", "its", "itself", "me",
    "mine", "my", "our", "ours", "she", "their", "theirs", "them",
    "themselves", "they", "us", "we", "what", "which", "who", "whom",
    "whose", "you", "your", "yours",
];

pub const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among",
    "around", "as", "at", "before", "behind", "below", "beneath", "beside",
    "between", "beyond", "by", "despite", "down", "during", "except", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "past", "per", "since", "through",
    "throughout", "to", "toward", "towards", "under", "until", "up", "upon",
    "via", "with", "within", "without",
];

pub const CONJUNCTIONS: &[&str] = &[
    "although", "and", "because", "but", "nor", "or", "so", "than",
    "though", "unless", "when", "whenever", "where", "whereas", "whether",
    "while", "yet",
];

/// Common adverbs that do not end in -ly.
pub const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "even", "ever", "far",
    "here", "how", "just", "more", "most", "much", "never", "not", "now",
    "often", "only", "quite", "rather", "soon", "still", "then", "there",
    "thus", "too", "very", "well",
];

/// Common adjectives checked before the verb lexicon so bare forms like
/// "present" and "standard" read as modifiers; their inflected verb forms
/// ("presents", "presented") still reach the verb path.
pub const ADJECTIVES: &[&str] = &[
    "acute", "chronic", "clinical", "common", "different", "early", "few",
    "first", "good", "great", "high", "important", "large", "late", "less",
    "low", "main", "major", "many", "new", "normal", "old", "other", "own",
    "poor", "present", "previous", "primary", "recent", "same", "second",
    "several", "severe", "significant", "similar", "small", "standard",
    "such", "third", "various",
];

/// Words before a period that do not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "al", "approx", "ca", "cf", "dr", "eg", "etc", "fig", "figs", "ie",
    "inc", "no", "resp", "st", "vs",
];

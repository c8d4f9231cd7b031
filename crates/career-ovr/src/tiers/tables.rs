//! Curated prestige tables. Order matters: the substring scan returns the first hit.

pub(crate) static ORGANIZATION_TIERS: &[(&str, u8)] = &[
    // technology
    ("google", 1),
    ("alphabet", 1),
    ("apple", 1),
    ("microsoft", 1),
    ("amazon", 1),
    ("meta", 1),
    ("facebook", 1),
    ("netflix", 1),
    ("tesla", 1),
    ("nvidia", 1),
    ("openai", 1),
    ("stripe", 1),
    // finance
    ("goldman sachs", 1),
    ("jpmorgan", 1),
    ("jp morgan", 1),
    ("morgan stanley", 1),
    ("blackrock", 1),
    ("citadel", 1),
    ("bridgewater", 1),
    ("renaissance technologies", 1),
    ("two sigma", 1),
    ("jane street", 1),
    ("de shaw", 1),
    ("aqr", 1),
    // asset management
    ("vanguard", 1),
    ("fidelity", 1),
    ("wellington management", 1),
    ("state street", 1),
    ("pimco", 1),
    ("salesforce", 2),
    ("adobe", 2),
    ("servicenow", 2),
    ("workday", 2),
    ("snowflake", 2),
    ("databricks", 2),
    ("airbnb", 2),
    ("uber", 2),
    ("lyft", 2),
    ("doordash", 2),
    ("shopify", 2),
    ("square", 2),
    ("block", 2),
    ("coinbase", 2),
    ("bank of america", 2),
    ("citigroup", 2),
    ("wells fargo", 2),
    ("ubs", 2),
    ("credit suisse", 2),
    ("deutsche bank", 2),
    ("barclays", 2),
    ("millennium", 2),
    ("point72", 2),
    ("balyasny", 2),
    // consulting
    ("mckinsey", 1),
    ("bain", 1),
    ("boston consulting group", 1),
    ("bcg", 1),
    ("deloitte", 2),
    ("pwc", 2),
    ("ey", 2),
    ("kpmg", 2),
    ("accenture", 2),
    // pharma and biotech
    ("pfizer", 1),
    ("moderna", 1),
    ("johnson & johnson", 1),
    ("j&j", 1),
    ("roche", 1),
    ("novartis", 1),
    ("merck", 2),
    ("abbvie", 2),
    ("bristol myers squibb", 2),
    ("gilead", 2),
];

pub(crate) static INSTITUTION_TIERS: &[(&str, u8)] = &[
    ("harvard", 1),
    ("stanford", 1),
    ("mit", 1),
    ("massachusetts institute of technology", 1),
    ("princeton", 1),
    ("yale", 1),
    ("columbia", 1),
    ("university of pennsylvania", 1),
    ("upenn", 1),
    ("penn", 1),
    ("wharton", 1),
    ("dartmouth", 1),
    ("brown", 1),
    ("cornell", 1),
    ("duke", 1),
    ("northwestern", 1),
    ("caltech", 1),
    ("university of chicago", 1),
    ("uchicago", 1),
    ("johns hopkins", 1),
    ("carnegie mellon", 1),
    ("cmu", 1),
    ("university of california berkeley", 2),
    ("uc berkeley", 2),
    ("berkeley", 2),
    ("university of michigan", 2),
    ("umich", 2),
    ("university of virginia", 2),
    ("uva", 2),
    ("georgetown", 2),
    ("vanderbilt", 2),
    ("rice", 2),
    ("notre dame", 2),
    ("university of north carolina", 2),
    ("unc", 2),
    ("ucla", 2),
    ("university of california los angeles", 2),
    ("usc", 2),
    ("university of southern california", 2),
    ("nyu", 2),
    ("new york university", 2),
    ("boston college", 2),
    ("georgia tech", 2),
    ("georgia institute of technology", 2),
    ("university of texas austin", 2),
    ("ut austin", 2),
    ("university of washington", 2),
    ("uw", 2),
    ("northeastern", 2),
    ("northeastern university", 2),
    ("boston university", 3),
    ("bu", 3),
    ("purdue", 3),
    ("penn state", 3),
    ("ohio state", 3),
    ("university of florida", 3),
    ("uf", 3),
    ("university of wisconsin", 3),
    ("uw madison", 3),
    ("university of illinois", 3),
    ("uiuc", 3),
    ("rutgers", 3),
    ("university of maryland", 3),
    ("umd", 3),
    ("indiana university", 3),
    ("syracuse", 3),
    ("fordham", 3),
    ("villanova", 3),
    ("pepperdine", 3),
    ("santa clara", 3),
    ("lehigh", 3),
];

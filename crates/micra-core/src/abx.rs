//! Antibiotic identifiers shared by panels, reference tables, and rule sets.
//!
//! Detection rules address antibiotics by these exact ids; a panel entry
//! with an unlisted id is still interpretable if a breakpoint exists for it.

pub const AMPICILLIN: &str = "ampicillin";
pub const AMOXICILLIN_CLAVULANATE: &str = "amoxicillin_clavulanate";
pub const AMPICILLIN_SULBACTAM: &str = "ampicillin_sulbactam";
pub const PIPERACILLIN_TAZOBACTAM: &str = "piperacillin_tazobactam";
pub const OXACILLIN: &str = "oxacillin";
pub const METHICILLIN: &str = "methicillin";
pub const PENICILLIN: &str = "penicillin";

pub const CEFAZOLIN: &str = "cefazolin";
pub const CEFUROXIME: &str = "cefuroxime";
pub const CEFOXITIN: &str = "cefoxitin";
pub const CEFTRIAXONE: &str = "ceftriaxone";
pub const CEFOTAXIME: &str = "cefotaxime";
pub const CEFTAZIDIME: &str = "ceftazidime";
pub const CEFEPIME: &str = "cefepime";

pub const ERTAPENEM: &str = "ertapenem";
pub const MEROPENEM: &str = "meropenem";
pub const IMIPENEM: &str = "imipenem";
pub const DORIPENEM: &str = "doripenem";

pub const AZTREONAM: &str = "aztreonam";

pub const CIPROFLOXACIN: &str = "ciprofloxacin";
pub const LEVOFLOXACIN: &str = "levofloxacin";
pub const MOXIFLOXACIN: &str = "moxifloxacin";

pub const GENTAMICIN: &str = "gentamicin";
pub const TOBRAMYCIN: &str = "tobramycin";
pub const AMIKACIN: &str = "amikacin";

pub const VANCOMYCIN: &str = "vancomycin";
pub const TEICOPLANIN: &str = "teicoplanin";
pub const DAPTOMYCIN: &str = "daptomycin";
pub const LINEZOLID: &str = "linezolid";

pub const ERYTHROMYCIN: &str = "erythromycin";
pub const CLINDAMYCIN: &str = "clindamycin";
pub const DOXYCYCLINE: &str = "doxycycline";

pub const TRIMETHOPRIM_SULFAMETHOXAZOLE: &str = "trimethoprim_sulfamethoxazole";
pub const NITROFURANTOIN: &str = "nitrofurantoin";
pub const COLISTIN: &str = "colistin";

/// Third-generation cephalosporins, the ESBL indicator set.
pub const THIRD_GEN_CEPHALOSPORINS: &[&str] = &[CEFTRIAXONE, CEFOTAXIME, CEFTAZIDIME];

/// Carbapenems tracked by the carbapenemase detector.
pub const CARBAPENEMS: &[&str] = &[ERTAPENEM, MEROPENEM, IMIPENEM, DORIPENEM];

/// Fluoroquinolone class members used by the class-resistance rule.
pub const FLUOROQUINOLONES: &[&str] = &[CIPROFLOXACIN, LEVOFLOXACIN, MOXIFLOXACIN];

/// Aminoglycoside class members used by the class-resistance rule.
pub const AMINOGLYCOSIDES: &[&str] = &[GENTAMICIN, TOBRAMYCIN, AMIKACIN];

/// Beta-lactamase-inhibitor combinations (restoration indicators).
pub const INHIBITOR_COMBINATIONS: &[&str] = &[
    AMOXICILLIN_CLAVULANATE,
    AMPICILLIN_SULBACTAM,
    PIPERACILLIN_TAZOBACTAM,
];

/// Every beta-lactam id in the formulary. MRSA overrides target this set.
pub const BETA_LACTAMS: &[&str] = &[
    AMPICILLIN,
    AMOXICILLIN_CLAVULANATE,
    AMPICILLIN_SULBACTAM,
    PIPERACILLIN_TAZOBACTAM,
    OXACILLIN,
    METHICILLIN,
    PENICILLIN,
    CEFAZOLIN,
    CEFUROXIME,
    CEFOXITIN,
    CEFTRIAXONE,
    CEFOTAXIME,
    CEFTAZIDIME,
    CEFEPIME,
    ERTAPENEM,
    MEROPENEM,
    IMIPENEM,
    DORIPENEM,
    AZTREONAM,
];

//! Drug monographs: static per-agent properties consulted by the
//! therapeutic strategy scorer.

use micra_core::abx;
use micra_core::reference::drug::{
    Activity, CostTier, DrugClass, DrugMonograph, RiskLevel, Route, Spectrum, StewardshipClass,
};

fn drug(
    id: &str,
    name: &str,
    class: DrugClass,
    spectrum: Spectrum,
    activity: Activity,
    stewardship: StewardshipClass,
) -> DrugMonograph {
    DrugMonograph {
        id: id.to_string(),
        name: name.to_string(),
        class,
        spectrum,
        activity,
        stewardship,
        renal_adjustment: false,
        hepatic_adjustment: false,
        interaction_risk: RiskLevel::Low,
        elderly_caution: false,
        resistance_induction: RiskLevel::Low,
        cost_tier: CostTier::Low,
        route: Route::Intravenous,
        doses_per_day: 3,
        cns_penetration: false,
        urine_concentration: false,
    }
}

pub fn monographs() -> Vec<DrugMonograph> {
    use Activity::*;
    use DrugClass::*;
    use Spectrum::*;
    use StewardshipClass::*;

    vec![
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 4,
            urine_concentration: true,
            ..drug(abx::AMPICILLIN, "Ampicillin", Penicillin, Narrow, Bactericidal, Preferred)
        },
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 4,
            ..drug(abx::PENICILLIN, "Penicillin G", Penicillin, Narrow, Bactericidal, Preferred)
        },
        DrugMonograph {
            hepatic_adjustment: true,
            doses_per_day: 4,
            ..drug(abx::OXACILLIN, "Oxacillin", Penicillin, Narrow, Bactericidal, Standard)
        },
        drug(abx::METHICILLIN, "Methicillin", Penicillin, Narrow, Bactericidal, Standard),
        DrugMonograph {
            route: Route::Oral,
            doses_per_day: 2,
            urine_concentration: true,
            ..drug(
                abx::AMOXICILLIN_CLAVULANATE,
                "Amoxicillin-clavulanate",
                InhibitorCombination,
                Broad,
                Bactericidal,
                Preferred,
            )
        },
        DrugMonograph {
            doses_per_day: 4,
            ..drug(
                abx::AMPICILLIN_SULBACTAM,
                "Ampicillin-sulbactam",
                InhibitorCombination,
                Broad,
                Bactericidal,
                Standard,
            )
        },
        DrugMonograph {
            renal_adjustment: true,
            doses_per_day: 4,
            cost_tier: CostTier::Moderate,
            ..drug(
                abx::PIPERACILLIN_TAZOBACTAM,
                "Piperacillin-tazobactam",
                InhibitorCombination,
                VeryBroad,
                Bactericidal,
                Standard,
            )
        },
        DrugMonograph {
            renal_adjustment: true,
            urine_concentration: true,
            ..drug(abx::CEFAZOLIN, "Cefazolin", Cephalosporin1, Narrow, Bactericidal, Preferred)
        },
        DrugMonograph {
            renal_adjustment: true,
            route: Route::Both,
            doses_per_day: 2,
            ..drug(abx::CEFUROXIME, "Cefuroxime", Cephalosporin2, Broad, Bactericidal, Standard)
        },
        drug(abx::CEFOXITIN, "Cefoxitin", Cephamycin, Broad, Bactericidal, Standard),
        DrugMonograph {
            doses_per_day: 1,
            cns_penetration: true,
            ..drug(abx::CEFTRIAXONE, "Ceftriaxone", Cephalosporin3, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            cns_penetration: true,
            ..drug(abx::CEFOTAXIME, "Cefotaxime", Cephalosporin3, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            cns_penetration: true,
            ..drug(abx::CEFTAZIDIME, "Ceftazidime", Cephalosporin3, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            elderly_caution: true,
            doses_per_day: 2,
            cns_penetration: true,
            cost_tier: CostTier::Moderate,
            ..drug(abx::CEFEPIME, "Cefepime", Cephalosporin4, VeryBroad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            doses_per_day: 1,
            cost_tier: CostTier::High,
            ..drug(abx::ERTAPENEM, "Ertapenem", Carbapenem, Broad, Bactericidal, Restricted)
        },
        DrugMonograph {
            renal_adjustment: true,
            cns_penetration: true,
            cost_tier: CostTier::High,
            ..drug(abx::MEROPENEM, "Meropenem", Carbapenem, VeryBroad, Bactericidal, Restricted)
        },
        DrugMonograph {
            renal_adjustment: true,
            elderly_caution: true,
            doses_per_day: 4,
            cost_tier: CostTier::High,
            ..drug(abx::IMIPENEM, "Imipenem-cilastatin", Carbapenem, VeryBroad, Bactericidal, Restricted)
        },
        DrugMonograph {
            renal_adjustment: true,
            cost_tier: CostTier::High,
            ..drug(abx::DORIPENEM, "Doripenem", Carbapenem, VeryBroad, Bactericidal, Restricted)
        },
        DrugMonograph {
            renal_adjustment: true,
            ..drug(abx::AZTREONAM, "Aztreonam", Monobactam, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 2,
            interaction_risk: RiskLevel::High,
            elderly_caution: true,
            resistance_induction: RiskLevel::High,
            urine_concentration: true,
            ..drug(abx::CIPROFLOXACIN, "Ciprofloxacin", Fluoroquinolone, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 1,
            interaction_risk: RiskLevel::High,
            elderly_caution: true,
            resistance_induction: RiskLevel::High,
            urine_concentration: true,
            ..drug(abx::LEVOFLOXACIN, "Levofloxacin", Fluoroquinolone, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 1,
            interaction_risk: RiskLevel::High,
            elderly_caution: true,
            hepatic_adjustment: true,
            resistance_induction: RiskLevel::High,
            ..drug(abx::MOXIFLOXACIN, "Moxifloxacin", Fluoroquinolone, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            elderly_caution: true,
            interaction_risk: RiskLevel::Moderate,
            doses_per_day: 1,
            urine_concentration: true,
            ..drug(abx::GENTAMICIN, "Gentamicin", Aminoglycoside, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            elderly_caution: true,
            interaction_risk: RiskLevel::Moderate,
            doses_per_day: 1,
            urine_concentration: true,
            ..drug(abx::TOBRAMYCIN, "Tobramycin", Aminoglycoside, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            elderly_caution: true,
            interaction_risk: RiskLevel::Moderate,
            doses_per_day: 1,
            urine_concentration: true,
            cost_tier: CostTier::Moderate,
            ..drug(abx::AMIKACIN, "Amikacin", Aminoglycoside, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            elderly_caution: true,
            interaction_risk: RiskLevel::Moderate,
            doses_per_day: 2,
            cns_penetration: true,
            cost_tier: CostTier::Moderate,
            ..drug(abx::VANCOMYCIN, "Vancomycin", Glycopeptide, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            doses_per_day: 1,
            cost_tier: CostTier::High,
            ..drug(abx::TEICOPLANIN, "Teicoplanin", Glycopeptide, Broad, Bactericidal, Standard)
        },
        DrugMonograph {
            renal_adjustment: true,
            doses_per_day: 1,
            resistance_induction: RiskLevel::Moderate,
            cost_tier: CostTier::Premium,
            ..drug(abx::DAPTOMYCIN, "Daptomycin", Lipopeptide, Broad, Bactericidal, Restricted)
        },
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 2,
            interaction_risk: RiskLevel::High,
            resistance_induction: RiskLevel::Moderate,
            cns_penetration: true,
            cost_tier: CostTier::Premium,
            ..drug(abx::LINEZOLID, "Linezolid", Oxazolidinone, Broad, Bacteriostatic, Restricted)
        },
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 4,
            interaction_risk: RiskLevel::High,
            hepatic_adjustment: true,
            resistance_induction: RiskLevel::Moderate,
            ..drug(abx::ERYTHROMYCIN, "Erythromycin", Macrolide, Narrow, Bacteriostatic, Standard)
        },
        DrugMonograph {
            route: Route::Both,
            hepatic_adjustment: true,
            resistance_induction: RiskLevel::Moderate,
            ..drug(abx::CLINDAMYCIN, "Clindamycin", Lincosamide, Narrow, Bacteriostatic, Standard)
        },
        DrugMonograph {
            route: Route::Oral,
            doses_per_day: 2,
            ..drug(abx::DOXYCYCLINE, "Doxycycline", Tetracycline, Broad, Bacteriostatic, Preferred)
        },
        DrugMonograph {
            route: Route::Both,
            doses_per_day: 2,
            renal_adjustment: true,
            interaction_risk: RiskLevel::Moderate,
            urine_concentration: true,
            ..drug(
                abx::TRIMETHOPRIM_SULFAMETHOXAZOLE,
                "Trimethoprim-sulfamethoxazole",
                FolateInhibitor,
                Broad,
                Bactericidal,
                Preferred,
            )
        },
        DrugMonograph {
            route: Route::Oral,
            doses_per_day: 2,
            renal_adjustment: true,
            urine_concentration: true,
            ..drug(abx::NITROFURANTOIN, "Nitrofurantoin", Nitrofuran, Narrow, Bactericidal, Preferred)
        },
        DrugMonograph {
            renal_adjustment: true,
            elderly_caution: true,
            interaction_risk: RiskLevel::Moderate,
            doses_per_day: 2,
            cost_tier: CostTier::High,
            ..drug(abx::COLISTIN, "Colistin", Polymyxin, Narrow, Bactericidal, Restricted)
        },
    ]
}

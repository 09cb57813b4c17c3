//! Organism records with intrinsic-resistance lists.

use micra_core::abx;
use micra_core::org::*;
use micra_core::reference::organism::{GramStain, OrganismCategory, OrganismRecord};

fn organism(
    id: &str,
    name: &str,
    category: OrganismCategory,
    gram_stain: GramStain,
    intrinsic: &[&str],
) -> OrganismRecord {
    OrganismRecord {
        id: id.to_string(),
        name: name.to_string(),
        category,
        gram_stain,
        intrinsic_resistance: intrinsic.iter().map(|s| s.to_string()).collect(),
        ampc_inducible: false,
    }
}

pub fn records() -> Vec<OrganismRecord> {
    vec![
        organism(
            ESCHERICHIA_COLI,
            "Escherichia coli",
            OrganismCategory::Enterobacterales,
            GramStain::Negative,
            &[],
        ),
        organism(
            KLEBSIELLA_PNEUMONIAE,
            "Klebsiella pneumoniae",
            OrganismCategory::Enterobacterales,
            GramStain::Negative,
            &[abx::AMPICILLIN],
        ),
        OrganismRecord {
            ampc_inducible: true,
            ..organism(
                KLEBSIELLA_AEROGENES,
                "Klebsiella aerogenes",
                OrganismCategory::Enterobacterales,
                GramStain::Negative,
                &[
                    abx::AMPICILLIN,
                    abx::AMOXICILLIN_CLAVULANATE,
                    abx::AMPICILLIN_SULBACTAM,
                    abx::CEFAZOLIN,
                ],
            )
        },
        OrganismRecord {
            ampc_inducible: true,
            ..organism(
                ENTEROBACTER_CLOACAE,
                "Enterobacter cloacae complex",
                OrganismCategory::Enterobacterales,
                GramStain::Negative,
                &[
                    abx::AMPICILLIN,
                    abx::AMOXICILLIN_CLAVULANATE,
                    abx::AMPICILLIN_SULBACTAM,
                    abx::CEFAZOLIN,
                    abx::CEFOXITIN,
                ],
            )
        },
        OrganismRecord {
            ampc_inducible: true,
            ..organism(
                CITROBACTER_FREUNDII,
                "Citrobacter freundii complex",
                OrganismCategory::Enterobacterales,
                GramStain::Negative,
                &[
                    abx::AMPICILLIN,
                    abx::AMOXICILLIN_CLAVULANATE,
                    abx::AMPICILLIN_SULBACTAM,
                    abx::CEFAZOLIN,
                ],
            )
        },
        OrganismRecord {
            ampc_inducible: true,
            ..organism(
                SERRATIA_MARCESCENS,
                "Serratia marcescens",
                OrganismCategory::Enterobacterales,
                GramStain::Negative,
                &[
                    abx::AMPICILLIN,
                    abx::AMOXICILLIN_CLAVULANATE,
                    abx::AMPICILLIN_SULBACTAM,
                    abx::CEFAZOLIN,
                    abx::CEFOXITIN,
                    abx::NITROFURANTOIN,
                    abx::COLISTIN,
                ],
            )
        },
        organism(
            PROTEUS_MIRABILIS,
            "Proteus mirabilis",
            OrganismCategory::Enterobacterales,
            GramStain::Negative,
            &[abx::NITROFURANTOIN, abx::DOXYCYCLINE, abx::COLISTIN],
        ),
        organism(
            PSEUDOMONAS_AERUGINOSA,
            "Pseudomonas aeruginosa",
            OrganismCategory::Pseudomonas,
            GramStain::Negative,
            &[
                abx::AMPICILLIN,
                abx::AMOXICILLIN_CLAVULANATE,
                abx::AMPICILLIN_SULBACTAM,
                abx::CEFAZOLIN,
                abx::CEFUROXIME,
                abx::CEFOXITIN,
                abx::CEFTRIAXONE,
                abx::CEFOTAXIME,
                abx::ERTAPENEM,
                abx::TRIMETHOPRIM_SULFAMETHOXAZOLE,
                abx::NITROFURANTOIN,
                abx::DOXYCYCLINE,
                abx::ERYTHROMYCIN,
                abx::CLINDAMYCIN,
            ],
        ),
        organism(
            STAPHYLOCOCCUS_AUREUS,
            "Staphylococcus aureus",
            OrganismCategory::Staphylococcus,
            GramStain::Positive,
            &[abx::AZTREONAM, abx::COLISTIN],
        ),
        organism(
            ENTEROCOCCUS_FAECALIS,
            "Enterococcus faecalis",
            OrganismCategory::Enterococcus,
            GramStain::Positive,
            &[
                abx::CEFAZOLIN,
                abx::CEFUROXIME,
                abx::CEFTRIAXONE,
                abx::CEFOTAXIME,
                abx::CEFTAZIDIME,
                abx::CEFEPIME,
                abx::CLINDAMYCIN,
                abx::TRIMETHOPRIM_SULFAMETHOXAZOLE,
                abx::AZTREONAM,
                abx::COLISTIN,
            ],
        ),
        organism(
            ENTEROCOCCUS_FAECIUM,
            "Enterococcus faecium",
            OrganismCategory::Enterococcus,
            GramStain::Positive,
            &[
                abx::CEFAZOLIN,
                abx::CEFUROXIME,
                abx::CEFTRIAXONE,
                abx::CEFOTAXIME,
                abx::CEFTAZIDIME,
                abx::CEFEPIME,
                abx::CLINDAMYCIN,
                abx::TRIMETHOPRIM_SULFAMETHOXAZOLE,
                abx::AZTREONAM,
                abx::COLISTIN,
            ],
        ),
        organism(
            STREPTOCOCCUS_PNEUMONIAE,
            "Streptococcus pneumoniae",
            OrganismCategory::StreptococcusPneumoniae,
            GramStain::Positive,
            &[
                abx::GENTAMICIN,
                abx::TOBRAMYCIN,
                abx::AMIKACIN,
                abx::AZTREONAM,
                abx::COLISTIN,
            ],
        ),
    ]
}

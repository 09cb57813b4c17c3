pub mod aminoglycoside;
pub mod ampc;
pub mod carbapenemase;
pub mod esbl;
pub mod fluoroquinolone;
pub mod mlsb;
pub mod mrsa;
pub mod penicillinase;
pub mod vre;

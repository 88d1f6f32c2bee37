pub mod configuration;
pub mod configurationerror;

pub mod evaluation {
    pub mod evaluationerror;
    pub mod evaluator;
    pub mod comparator;
}

pub mod math {
    pub mod integrand {
        pub mod integrand;
        pub mod xexpnegx;
        pub mod polynomial;
        pub mod elementary;
        pub mod integrandmanager;
    }

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod interval;
        pub mod quadraturerule;
        pub mod compositetrapezoid;
        pub mod compositesimpson;
        pub mod gausslegendre;
    }
}

pub mod report {
    pub mod report;
    pub mod reportsink;
    pub mod textreportsink;
    pub mod jsonreportsink;
}

pub mod scenario;

//! Macros for ergonomic rotor catalog construction.

/// Build a list of catalog rotors over one alphabet.
///
/// Each entry is `NAME => KIND CYCLES`, where `KIND` is `reflector`,
/// `fixed` or `moving(NOTCHES)`. Evaluates to
/// `Result<Vec<Rotor>, BuildError>`; the first invalid entry wins.
///
/// # Example
///
/// ```
/// use enigma::core::Alphabet;
/// use enigma::rotor_catalog;
///
/// let catalog = rotor_catalog! {
///     Alphabet::default();
///     "B" => reflector "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
///     "Beta" => fixed "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)",
///     "I" => moving("Q") "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
/// }
/// .unwrap();
///
/// assert_eq!(catalog.len(), 3);
/// assert!(catalog[0].reflecting());
/// ```
#[macro_export]
macro_rules! rotor_catalog {
    (
        $alphabet:expr;
        $(
            $name:literal => $kind:ident $(($notches:expr))? $cycles:literal
        ),* $(,)?
    ) => {{
        let alphabet: ::std::sync::Arc<$crate::core::Alphabet> =
            ::std::convert::Into::into($alphabet);
        let builders: ::std::vec::Vec<$crate::builder::RotorBuilder> = ::std::vec![
            $(
                $crate::builder::RotorBuilder::new()
                    .name($name)
                    .$kind($($notches)?)
                    .cycles($cycles)
            ),*
        ];
        builders
            .into_iter()
            .map(|builder| builder.build(&alphabet))
            .collect::<::std::result::Result<
                ::std::vec::Vec<$crate::core::Rotor>,
                $crate::builder::BuildError,
            >>()
    }};
}

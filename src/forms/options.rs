//! Fixed answer sets of the intake form.
//!
//! Each option serializes to the label stored in the sheets; ASCII aliases
//! are accepted on input so forms can be typed without accents.

use serde::{Deserialize, Serialize};

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

choice! {
    /// How the client found the clinic.
    Origin (default Instagram) {
        Instagram => "Instagram",
        Facebook => "Facebook",
        Referral => "Indicação" | "Indicacao",
        Other => "Outro",
    }
}

choice! {
    Bowel (default Regular) {
        Regular => "Regular",
        Constipated => "Preso",
        Irregular => "Irregular",
    }
}

choice! {
    Sleep (default Good) {
        Good => "Boa",
        Fair => "Regular",
        Poor => "Ruim",
    }
}

choice! {
    Water (default Enough) {
        Enough => "Sim (+2L)" | "Sim",
        Little => "Pouco",
        No => "Não" | "Nao",
    }
}

choice! {
    /// Fitzpatrick skin phototype.
    Phototype (default I) {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
        V => "V",
        VI => "VI",
    }
}

choice! {
    SkinType (default Normal) {
        Normal => "Normal",
        Dry => "Seca",
        Oily => "Oleosa",
        Combination => "Mista",
        Seborrheic => "Seborréica" | "Seborreica",
        Acneic => "Acneica",
    }
}

choice! {
    Lesion (default Blackheads) {
        Blackheads => "Cravos",
        Pimples => "Espinhas",
        Spots => "Manchas",
        Melasma => "Melasma",
        Wrinkles => "Rugas",
        Sagging => "Flacidez",
        DarkCircles => "Olheiras",
        Scar => "Cicatriz",
        SpiderVeins => "Vasinhos",
        Warts => "Verrugas",
    }
}

choice! {
    Payment (default Pix) {
        Pix => "PIX" | "Pix",
        Card => "Cartão" | "Cartao",
        Cash => "Dinheiro",
    }
}

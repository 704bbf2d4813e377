//! Subset of the Rholang `Par` protobuf schema.
//!
//! Field numbers follow `proto/rho_types.proto`. Process kinds this crate does
//! not model (receives, news, matches, ...) are kept as raw length-delimited
//! payloads: they decode without loss and their presence can be detected.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Par {
    #[prost(message, repeated, tag = "1")]
    pub sends: ::prost::alloc::vec::Vec<Send>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub receives: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", repeated, tag = "4")]
    pub news: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, repeated, tag = "5")]
    pub exprs: ::prost::alloc::vec::Vec<Expr>,
    #[prost(bytes = "vec", repeated, tag = "6")]
    pub matches: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", repeated, tag = "7")]
    pub unforgeables: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", repeated, tag = "8")]
    pub connectives: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", tag = "9")]
    pub locally_free: ::prost::alloc::vec::Vec<u8>,
    #[prost(bool, tag = "10")]
    pub connective_used: bool,
    #[prost(bytes = "vec", repeated, tag = "11")]
    pub bundles: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Send {
    #[prost(message, optional, tag = "1")]
    pub chan: ::core::option::Option<Par>,
    #[prost(message, repeated, tag = "2")]
    pub data: ::prost::alloc::vec::Vec<Par>,
    #[prost(bool, tag = "3")]
    pub persistent: bool,
    #[prost(bytes = "vec", tag = "5")]
    pub locally_free: ::prost::alloc::vec::Vec<u8>,
    #[prost(bool, tag = "6")]
    pub connective_used: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Expr {
    #[prost(oneof = "expr::ExprInstance", tags = "1, 2, 3, 4, 20, 25")]
    pub expr_instance: ::core::option::Option<expr::ExprInstance>,
}

pub mod expr {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ExprInstance {
        #[prost(bool, tag = "1")]
        GBool(bool),
        #[prost(sint64, tag = "2")]
        GInt(i64),
        #[prost(string, tag = "3")]
        GString(::prost::alloc::string::String),
        #[prost(string, tag = "4")]
        GUri(::prost::alloc::string::String),
        #[prost(message, tag = "20")]
        EListBody(super::EList),
        #[prost(bytes, tag = "25")]
        GByteArray(::prost::alloc::vec::Vec<u8>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EList {
    #[prost(message, repeated, tag = "1")]
    pub ps: ::prost::alloc::vec::Vec<Par>,
    #[prost(bytes = "vec", tag = "3")]
    pub locally_free: ::prost::alloc::vec::Vec<u8>,
    #[prost(bool, tag = "4")]
    pub connective_used: bool,
    /// Encoded `Var`; only present on list patterns.
    #[prost(bytes = "vec", optional, tag = "5")]
    pub remainder: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

impl Par {
    /// Names of the populated process kinds this crate cannot represent.
    pub fn unsupported_kinds(&self) -> Vec<&'static str> {
        [
            ("receives", self.receives.is_empty()),
            ("news", self.news.is_empty()),
            ("matches", self.matches.is_empty()),
            ("unforgeables", self.unforgeables.is_empty()),
            ("connectives", self.connectives.is_empty()),
            ("bundles", self.bundles.is_empty()),
        ]
        .into_iter()
        .filter(|(_, empty)| !empty)
        .map(|(name, _)| name)
        .collect()
    }
}

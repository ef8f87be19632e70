//! Core types for Folio

mod metadata;
mod profile;

pub use metadata::{MetaAttr, MetaTag, OpenGraph, PageMetadata};
pub use profile::{
    ContactData, EducationEntry, HeroData, ProfileData, ProjectEntry, ProjectLink, SocialLink,
    SocialLinks, WorkEntry, PRESENT_LABEL,
};

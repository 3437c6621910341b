//! Rust types for the per-category JSON units.
//!
//! These are the serde target for `wn-<lexname>.json` documents. Field names
//! are camelCase on disk, part of speech is its one-letter code and relation
//! types are their snake_case names.

use serde::{Deserialize, Serialize};

// =============================================================================
// CATEGORY UNIT
// =============================================================================

/// One `wn-<lexname>.json` document as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexUnitDoc {
    #[serde(default)]
    pub entries: Vec<LexicalEntry>,
    #[serde(default)]
    pub synsets: Vec<Synset>,
}

/// A parsed category unit together with the tag taken from its file name.
#[derive(Debug, Clone)]
pub struct LexUnit {
    pub lexname: String,
    pub pos: PartOfSpeech,
    pub doc: LexUnitDoc,
}

// =============================================================================
// ENTRIES AND SENSES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalEntry {
    pub id: String,
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    pub id: String,
    pub synset: String,
    #[serde(default)]
    pub sense_key: Option<String>,
}

// =============================================================================
// SYNSETS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synset {
    pub id: String,
    pub part_of_speech: PartOfSpeech,
    pub lexname: String,
    #[serde(default)]
    pub relations: Vec<SynsetRelation>,
}

impl Synset {
    /// Targets of this synset's relations of the given type, in declaration order.
    pub fn targets(&self, rel_type: RelType) -> impl Iterator<Item = &str> {
        self.relations
            .iter()
            .filter(move |r| r.rel_type == rel_type)
            .map(|r| r.target.as_str())
    }

    pub fn has_relation(&self, rel_type: RelType, target: &str) -> bool {
        self.relations
            .iter()
            .any(|r| r.rel_type == rel_type && r.target == target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynsetRelation {
    pub rel_type: RelType,
    pub target: String,
}

// =============================================================================
// PART OF SPEECH
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "r")]
    Adverb,
    #[serde(rename = "s")]
    AdjectiveSatellite,
}

impl PartOfSpeech {
    pub fn code(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
            PartOfSpeech::AdjectiveSatellite => 's',
        }
    }

    /// Equality, except that adjectives and satellites count as one category.
    pub fn equivalent(self, other: PartOfSpeech) -> bool {
        use PartOfSpeech::*;
        self == other
            || matches!(
                (self, other),
                (Adjective, AdjectiveSatellite) | (AdjectiveSatellite, Adjective)
            )
    }

    /// Category of a lex file tag, from its first three characters.
    pub fn from_lexname(lexname: &str) -> Option<PartOfSpeech> {
        match lexname.get(..3)? {
            "nou" => Some(PartOfSpeech::Noun),
            "ver" => Some(PartOfSpeech::Verb),
            "adj" => Some(PartOfSpeech::Adjective),
            "adv" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =============================================================================
// RELATION TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelType {
    Hypernym,
    Hyponym,
    InstanceHypernym,
    InstanceHyponym,
    MeroMember,
    HoloMember,
    MeroPart,
    HoloPart,
    MeroSubstance,
    HoloSubstance,
    MeroLocation,
    HoloLocation,
    MeroPortion,
    HoloPortion,
    Meronym,
    Holonym,
    BeInState,
    StateOf,
    Causes,
    IsCausedBy,
    Subevent,
    IsSubeventOf,
    MannerOf,
    InManner,
    Restricts,
    RestrictedBy,
    Classifies,
    ClassifiedBy,
    Entails,
    IsEntailedBy,
    DomainRegion,
    HasDomainRegion,
    DomainTopic,
    HasDomainTopic,
    Exemplifies,
    IsExemplifiedBy,
    Role,
    Involved,
    Agent,
    InvolvedAgent,
    Patient,
    InvolvedPatient,
    Result,
    InvolvedResult,
    Instrument,
    InvolvedInstrument,
    Location,
    InvolvedLocation,
    Direction,
    InvolvedDirection,
    TargetDirection,
    InvolvedTargetDirection,
    SourceDirection,
    InvolvedSourceDirection,
    CoAgentPatient,
    CoPatientAgent,
    CoAgentInstrument,
    CoInstrumentAgent,
    CoAgentResult,
    CoResultAgent,
    CoPatientInstrument,
    CoInstrumentPatient,
    CoInstrumentResult,
    CoResultInstrument,
    CoRole,
    Feminine,
    HasFeminine,
    Masculine,
    HasMasculine,
    Young,
    HasYoung,
    Diminutive,
    HasDiminutive,
    Augmentative,
    HasAugmentative,
    Antonym,
    Similar,
    EqSynonym,
    Attribute,
    Also,
    IrSynonym,
    Other,
}

impl RelType {
    /// The declared inverse, if the relation type has one.
    pub fn inverse(self) -> Option<RelType> {
        use RelType::*;
        let inv = match self {
            Hypernym => Hyponym,
            Hyponym => Hypernym,
            InstanceHypernym => InstanceHyponym,
            InstanceHyponym => InstanceHypernym,
            MeroMember => HoloMember,
            HoloMember => MeroMember,
            MeroPart => HoloPart,
            HoloPart => MeroPart,
            MeroSubstance => HoloSubstance,
            HoloSubstance => MeroSubstance,
            MeroLocation => HoloLocation,
            HoloLocation => MeroLocation,
            MeroPortion => HoloPortion,
            HoloPortion => MeroPortion,
            Meronym => Holonym,
            Holonym => Meronym,
            BeInState => StateOf,
            StateOf => BeInState,
            Causes => IsCausedBy,
            IsCausedBy => Causes,
            Subevent => IsSubeventOf,
            IsSubeventOf => Subevent,
            MannerOf => InManner,
            InManner => MannerOf,
            Restricts => RestrictedBy,
            RestrictedBy => Restricts,
            Classifies => ClassifiedBy,
            ClassifiedBy => Classifies,
            Entails => IsEntailedBy,
            IsEntailedBy => Entails,
            DomainRegion => HasDomainRegion,
            HasDomainRegion => DomainRegion,
            DomainTopic => HasDomainTopic,
            HasDomainTopic => DomainTopic,
            Exemplifies => IsExemplifiedBy,
            IsExemplifiedBy => Exemplifies,
            Role => Involved,
            Involved => Role,
            Agent => InvolvedAgent,
            InvolvedAgent => Agent,
            Patient => InvolvedPatient,
            InvolvedPatient => Patient,
            Result => InvolvedResult,
            InvolvedResult => Result,
            Instrument => InvolvedInstrument,
            InvolvedInstrument => Instrument,
            Location => InvolvedLocation,
            InvolvedLocation => Location,
            Direction => InvolvedDirection,
            InvolvedDirection => Direction,
            TargetDirection => InvolvedTargetDirection,
            InvolvedTargetDirection => TargetDirection,
            SourceDirection => InvolvedSourceDirection,
            InvolvedSourceDirection => SourceDirection,
            CoAgentPatient => CoPatientAgent,
            CoPatientAgent => CoAgentPatient,
            CoAgentInstrument => CoInstrumentAgent,
            CoInstrumentAgent => CoAgentInstrument,
            CoAgentResult => CoResultAgent,
            CoResultAgent => CoAgentResult,
            CoPatientInstrument => CoInstrumentPatient,
            CoInstrumentPatient => CoPatientInstrument,
            CoInstrumentResult => CoResultInstrument,
            CoResultInstrument => CoInstrumentResult,
            Feminine => HasFeminine,
            HasFeminine => Feminine,
            Masculine => HasMasculine,
            HasMasculine => Masculine,
            Young => HasYoung,
            HasYoung => Young,
            Diminutive => HasDiminutive,
            HasDiminutive => Diminutive,
            Augmentative => HasAugmentative,
            HasAugmentative => Augmentative,
            // Self-inverse.
            CoRole => CoRole,
            Antonym => Antonym,
            Similar => Similar,
            EqSynonym => EqSynonym,
            Attribute => Attribute,
            Also | IrSynonym | Other => return None,
        };
        Some(inv)
    }

    /// The on-disk name, as used in fix commands.
    pub fn as_str(self) -> &'static str {
        use RelType::*;
        match self {
            Hypernym => "hypernym",
            Hyponym => "hyponym",
            InstanceHypernym => "instance_hypernym",
            InstanceHyponym => "instance_hyponym",
            MeroMember => "mero_member",
            HoloMember => "holo_member",
            MeroPart => "mero_part",
            HoloPart => "holo_part",
            MeroSubstance => "mero_substance",
            HoloSubstance => "holo_substance",
            MeroLocation => "mero_location",
            HoloLocation => "holo_location",
            MeroPortion => "mero_portion",
            HoloPortion => "holo_portion",
            Meronym => "meronym",
            Holonym => "holonym",
            BeInState => "be_in_state",
            StateOf => "state_of",
            Causes => "causes",
            IsCausedBy => "is_caused_by",
            Subevent => "subevent",
            IsSubeventOf => "is_subevent_of",
            MannerOf => "manner_of",
            InManner => "in_manner",
            Restricts => "restricts",
            RestrictedBy => "restricted_by",
            Classifies => "classifies",
            ClassifiedBy => "classified_by",
            Entails => "entails",
            IsEntailedBy => "is_entailed_by",
            DomainRegion => "domain_region",
            HasDomainRegion => "has_domain_region",
            DomainTopic => "domain_topic",
            HasDomainTopic => "has_domain_topic",
            Exemplifies => "exemplifies",
            IsExemplifiedBy => "is_exemplified_by",
            Role => "role",
            Involved => "involved",
            Agent => "agent",
            InvolvedAgent => "involved_agent",
            Patient => "patient",
            InvolvedPatient => "involved_patient",
            Result => "result",
            InvolvedResult => "involved_result",
            Instrument => "instrument",
            InvolvedInstrument => "involved_instrument",
            Location => "location",
            InvolvedLocation => "involved_location",
            Direction => "direction",
            InvolvedDirection => "involved_direction",
            TargetDirection => "target_direction",
            InvolvedTargetDirection => "involved_target_direction",
            SourceDirection => "source_direction",
            InvolvedSourceDirection => "involved_source_direction",
            CoAgentPatient => "co_agent_patient",
            CoPatientAgent => "co_patient_agent",
            CoAgentInstrument => "co_agent_instrument",
            CoInstrumentAgent => "co_instrument_agent",
            CoAgentResult => "co_agent_result",
            CoResultAgent => "co_result_agent",
            CoPatientInstrument => "co_patient_instrument",
            CoInstrumentPatient => "co_instrument_patient",
            CoInstrumentResult => "co_instrument_result",
            CoResultInstrument => "co_result_instrument",
            CoRole => "co_role",
            Feminine => "feminine",
            HasFeminine => "has_feminine",
            Masculine => "masculine",
            HasMasculine => "has_masculine",
            Young => "young",
            HasYoung => "has_young",
            Diminutive => "diminutive",
            HasDiminutive => "has_diminutive",
            Augmentative => "augmentative",
            HasAugmentative => "has_augmentative",
            Antonym => "antonym",
            Similar => "similar",
            EqSynonym => "eq_synonym",
            Attribute => "attribute",
            Also => "also",
            IrSynonym => "ir_synonym",
            Other => "other",
        }
    }
}

impl std::fmt::Display for RelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

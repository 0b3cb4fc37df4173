//! The typed query façade.
//!
//! [`Query`] owns one [`ParameterStore`] and layers a curated set of typed
//! accessors over it. Every accessor is a bidirectional codec: the getter
//! decodes the stored string (absence or malformed input reads as `None`),
//! the setter serializes a typed value back into the store (`None`
//! clears). Parameters the façade does not model remain reachable through
//! the untyped [`get`](Query::get)/[`set`](Query::set) escape hatch.

use crate::params::{
    AlternativesAsExact, AroundRadius, ExactOnSingleWordQuery, QueryType, RemoveStopWords,
    RemoveWordsIfNoResults, TypoTolerance,
};
use crate::store::ParameterStore;
use searchlite_core::codec::{
    decode_bool, decode_float_list, decode_json_array, decode_string_list, decode_uint,
    encode_bool, encode_json_array, encode_string_list,
};
use searchlite_core::{GeoPoint, GeoRect};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A search query: an open parameter bag with typed views.
///
/// `Query` is a pure value. Cloning deep-copies the store, so a clone is
/// the supported way to hand a query to another thread; two queries are
/// equal exactly when their stores hold the same name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    params: ParameterStore,
}

impl Query {
    /// An empty query (every parameter at its service default).
    pub fn new() -> Self {
        Self::default()
    }

    /// A query with the full-text `query` parameter set.
    pub fn with_query(text: impl Into<String>) -> Self {
        let mut query = Self::new();
        query.params.set("query", Some(text.into()));
        query
    }

    /// A query seeded from arbitrary name/value pairs, modeled or not.
    pub fn from_parameters(params: BTreeMap<String, String>) -> Self {
        Self {
            params: ParameterStore::from(params),
        }
    }

    /// Parse a URL query string into a fresh query.
    pub fn parse(query_string: &str) -> Self {
        Self {
            params: ParameterStore::parse(query_string),
        }
    }

    /// Parse a URL query string into this query, merging with the
    /// parameters already set. See [`ParameterStore::parse_into`].
    pub fn parse_into(&mut self, query_string: &str) {
        self.params.parse_into(query_string);
    }

    /// Serialize into the canonical wire form. See
    /// [`ParameterStore::build`].
    pub fn build(&self) -> String {
        self.params.build()
    }

    /// The underlying parameter store.
    pub fn parameters(&self) -> &ParameterStore {
        &self.params
    }

    // -- Untyped escape hatch --------------------------------------------

    /// Raw string value of any parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Set or clear any parameter by its raw string value.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.params.set(name, value);
    }

    /// Remove a parameter, returning its previous raw value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.params.remove(name)
    }

    // -- Shared codec plumbing -------------------------------------------

    fn get_bool(&self, name: &str) -> Option<bool> {
        self.params.get(name).and_then(decode_bool)
    }

    fn set_bool(&mut self, name: &str, value: Option<bool>) {
        self.params.set(name, value.map(encode_bool));
    }

    fn get_uint(&self, name: &str) -> Option<u64> {
        self.params.get(name).and_then(decode_uint)
    }

    fn set_uint(&mut self, name: &str, value: Option<u64>) {
        self.params.set(name, value.map(|n| n.to_string()));
    }

    fn set_str(&mut self, name: &str, value: Option<&str>) {
        self.params.set(name, value.map(str::to_owned));
    }

    fn get_string_list(&self, name: &str) -> Option<Vec<String>> {
        self.params.get(name).map(decode_string_list)
    }

    fn set_string_list(&mut self, name: &str, value: Option<Vec<String>>) {
        self.params.set(name, value.map(|items| encode_string_list(&items)));
    }

    fn get_json_array(&self, name: &str) -> Option<Vec<Value>> {
        self.params.get(name).and_then(decode_json_array)
    }

    fn set_json_array(&mut self, name: &str, value: Option<Vec<Value>>) {
        self.params
            .set(name, value.and_then(|items| encode_json_array(&items)));
    }

    // -- Full-text search ------------------------------------------------

    /// The full-text query.
    pub fn query(&self) -> Option<&str> {
        self.params.get("query")
    }

    pub fn set_query(&mut self, text: Option<&str>) {
        self.set_str("query", text);
    }

    /// How query words are interpreted (prefix matching).
    pub fn query_type(&self) -> Option<QueryType> {
        self.params.get("queryType").and_then(QueryType::parse)
    }

    pub fn set_query_type(&mut self, value: Option<QueryType>) {
        self.set_str("queryType", value.map(|v| v.as_str()));
    }

    /// Strategy for progressively removing query words when a search
    /// returns no results.
    pub fn remove_words_if_no_results(&self) -> Option<RemoveWordsIfNoResults> {
        self.params
            .get("removeWordsIfNoResults")
            .and_then(RemoveWordsIfNoResults::parse)
    }

    pub fn set_remove_words_if_no_results(&mut self, value: Option<RemoveWordsIfNoResults>) {
        self.set_str("removeWordsIfNoResults", value.map(|v| v.as_str()));
    }

    /// Restrict matching to a subset of the searchable attributes.
    pub fn restrict_searchable_attributes(&self) -> Option<Vec<String>> {
        self.get_string_list("restrictSearchableAttributes")
    }

    pub fn set_restrict_searchable_attributes(&mut self, attributes: Option<Vec<String>>) {
        self.set_string_list("restrictSearchableAttributes", attributes);
    }

    /// Enable the advanced query syntax (quoted phrases, `-` exclusion).
    pub fn advanced_syntax(&self) -> Option<bool> {
        self.get_bool("advancedSyntax")
    }

    pub fn set_advanced_syntax(&mut self, enabled: Option<bool>) {
        self.set_bool("advancedSyntax", enabled);
    }

    /// Words that may be dropped from the query without failing it.
    pub fn optional_words(&self) -> Option<Vec<String>> {
        self.get_string_list("optionalWords")
    }

    pub fn set_optional_words(&mut self, words: Option<Vec<String>>) {
        self.set_string_list("optionalWords", words);
    }

    /// Precision of the proximity ranking criterion, in words.
    pub fn min_proximity(&self) -> Option<u64> {
        self.get_uint("minProximity")
    }

    pub fn set_min_proximity(&mut self, value: Option<u64>) {
        self.set_uint("minProximity", value);
    }

    // -- Typos -----------------------------------------------------------

    pub fn typo_tolerance(&self) -> Option<TypoTolerance> {
        self.params
            .get("typoTolerance")
            .and_then(TypoTolerance::parse)
    }

    pub fn set_typo_tolerance(&mut self, value: Option<TypoTolerance>) {
        self.set_str("typoTolerance", value.map(|v| v.as_str()));
    }

    /// Minimum word length before one typo is allowed.
    pub fn min_word_size_for_1_typo(&self) -> Option<u64> {
        self.get_uint("minWordSizefor1Typo")
    }

    pub fn set_min_word_size_for_1_typo(&mut self, value: Option<u64>) {
        self.set_uint("minWordSizefor1Typo", value);
    }

    /// Minimum word length before two typos are allowed.
    pub fn min_word_size_for_2_typos(&self) -> Option<u64> {
        self.get_uint("minWordSizefor2Typos")
    }

    pub fn set_min_word_size_for_2_typos(&mut self, value: Option<u64>) {
        self.set_uint("minWordSizefor2Typos", value);
    }

    /// Whether typos are tolerated inside numeric tokens.
    pub fn allow_typos_on_numeric_tokens(&self) -> Option<bool> {
        self.get_bool("allowTyposOnNumericTokens")
    }

    pub fn set_allow_typos_on_numeric_tokens(&mut self, enabled: Option<bool>) {
        self.set_bool("allowTyposOnNumericTokens", enabled);
    }

    /// Attributes on which typo tolerance is switched off.
    pub fn disable_typo_tolerance_on_attributes(&self) -> Option<Vec<String>> {
        self.get_string_list("disableTypoToleranceOnAttributes")
    }

    pub fn set_disable_typo_tolerance_on_attributes(&mut self, attributes: Option<Vec<String>>) {
        self.set_string_list("disableTypoToleranceOnAttributes", attributes);
    }

    // -- Language --------------------------------------------------------

    /// Treat singular and plural word forms as equivalent.
    pub fn ignore_plurals(&self) -> Option<bool> {
        self.get_bool("ignorePlurals")
    }

    pub fn set_ignore_plurals(&mut self, enabled: Option<bool>) {
        self.set_bool("ignorePlurals", enabled);
    }

    /// Stop-word removal: a blanket toggle or an explicit language list.
    /// Decoding tries the boolean shape before the language list; see
    /// [`RemoveStopWords`].
    pub fn remove_stop_words(&self) -> Option<RemoveStopWords> {
        self.params.get("removeStopWords").map(RemoveStopWords::from_wire)
    }

    pub fn set_remove_stop_words(&mut self, value: Option<RemoveStopWords>) {
        self.params
            .set("removeStopWords", value.map(|v| v.to_wire()));
    }

    // -- Synonyms --------------------------------------------------------

    /// Whether synonym expansion is applied to the query.
    pub fn synonyms(&self) -> Option<bool> {
        self.get_bool("synonyms")
    }

    pub fn set_synonyms(&mut self, enabled: Option<bool>) {
        self.set_bool("synonyms", enabled);
    }

    /// Whether highlights show the matched synonym instead of the
    /// original query word.
    pub fn replace_synonyms_in_highlight(&self) -> Option<bool> {
        self.get_bool("replaceSynonymsInHighlight")
    }

    pub fn set_replace_synonyms_in_highlight(&mut self, enabled: Option<bool>) {
        self.set_bool("replaceSynonymsInHighlight", enabled);
    }

    // -- Exactness -------------------------------------------------------

    pub fn exact_on_single_word_query(&self) -> Option<ExactOnSingleWordQuery> {
        self.params
            .get("exactOnSingleWordQuery")
            .and_then(ExactOnSingleWordQuery::parse)
    }

    pub fn set_exact_on_single_word_query(&mut self, value: Option<ExactOnSingleWordQuery>) {
        self.set_str("exactOnSingleWordQuery", value.map(|v| v.as_str()));
    }

    /// Word forms counted as exact matches. Unknown tags in the stored
    /// value are dropped, not errors.
    pub fn alternatives_as_exact(&self) -> Option<Vec<AlternativesAsExact>> {
        self.get_string_list("alternativesAsExact").map(|tags| {
            tags.iter()
                .filter_map(|tag| AlternativesAsExact::parse(tag))
                .collect()
        })
    }

    pub fn set_alternatives_as_exact(&mut self, value: Option<Vec<AlternativesAsExact>>) {
        self.params.set(
            "alternativesAsExact",
            value.map(|alternatives| {
                alternatives
                    .iter()
                    .map(|a| a.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            }),
        );
    }

    // -- Analytics -------------------------------------------------------

    /// Whether this search is recorded in the service analytics.
    pub fn analytics(&self) -> Option<bool> {
        self.get_bool("analytics")
    }

    pub fn set_analytics(&mut self, enabled: Option<bool>) {
        self.set_bool("analytics", enabled);
    }

    /// Tags forwarded to the analytics pipeline.
    pub fn analytics_tags(&self) -> Option<Vec<String>> {
        self.get_string_list("analyticsTags")
    }

    pub fn set_analytics_tags(&mut self, tags: Option<Vec<String>>) {
        self.set_string_list("analyticsTags", tags);
    }

    // -- Pagination ------------------------------------------------------

    /// Zero-based page of results to return.
    pub fn page(&self) -> Option<u64> {
        self.get_uint("page")
    }

    pub fn set_page(&mut self, page: Option<u64>) {
        self.set_uint("page", page);
    }

    pub fn hits_per_page(&self) -> Option<u64> {
        self.get_uint("hitsPerPage")
    }

    pub fn set_hits_per_page(&mut self, hits: Option<u64>) {
        self.set_uint("hitsPerPage", hits);
    }

    // -- Result shaping --------------------------------------------------

    /// Attributes returned in each hit.
    pub fn attributes_to_retrieve(&self) -> Option<Vec<String>> {
        self.get_string_list("attributesToRetrieve")
    }

    pub fn set_attributes_to_retrieve(&mut self, attributes: Option<Vec<String>>) {
        self.set_string_list("attributesToRetrieve", attributes);
    }

    /// Attributes whose matches are highlighted in each hit.
    pub fn attributes_to_highlight(&self) -> Option<Vec<String>> {
        self.get_string_list("attributesToHighlight")
    }

    pub fn set_attributes_to_highlight(&mut self, attributes: Option<Vec<String>>) {
        self.set_string_list("attributesToHighlight", attributes);
    }

    /// Attributes returned as snippets, optionally with a length as in
    /// `"content:20"`.
    pub fn attributes_to_snippet(&self) -> Option<Vec<String>> {
        self.get_string_list("attributesToSnippet")
    }

    pub fn set_attributes_to_snippet(&mut self, attributes: Option<Vec<String>>) {
        self.set_string_list("attributesToSnippet", attributes);
    }

    /// Ask the service to report ranking details with each hit.
    pub fn get_ranking_info(&self) -> Option<bool> {
        self.get_bool("getRankingInfo")
    }

    pub fn set_get_ranking_info(&mut self, enabled: Option<bool>) {
        self.set_bool("getRankingInfo", enabled);
    }

    /// Tag inserted before each highlighted part.
    pub fn highlight_pre_tag(&self) -> Option<&str> {
        self.params.get("highlightPreTag")
    }

    pub fn set_highlight_pre_tag(&mut self, tag: Option<&str>) {
        self.set_str("highlightPreTag", tag);
    }

    /// Tag inserted after each highlighted part.
    pub fn highlight_post_tag(&self) -> Option<&str> {
        self.params.get("highlightPostTag")
    }

    pub fn set_highlight_post_tag(&mut self, tag: Option<&str>) {
        self.set_str("highlightPostTag", tag);
    }

    /// Marker for truncation inside snippets.
    pub fn snippet_ellipsis_text(&self) -> Option<&str> {
        self.params.get("snippetEllipsisText")
    }

    pub fn set_snippet_ellipsis_text(&mut self, text: Option<&str>) {
        self.set_str("snippetEllipsisText", text);
    }

    // -- Filtering and faceting ------------------------------------------

    /// Numeric filter expressions, e.g. `["price>100", ["size=7","size=9"]]`
    /// where a nested array is a disjunction.
    pub fn numeric_filters(&self) -> Option<Vec<Value>> {
        self.get_json_array("numericFilters")
    }

    pub fn set_numeric_filters(&mut self, filters: Option<Vec<Value>>) {
        self.set_json_array("numericFilters", filters);
    }

    /// Tag filter expressions, same nesting rules as `numericFilters`.
    pub fn tag_filters(&self) -> Option<Vec<Value>> {
        self.get_json_array("tagFilters")
    }

    pub fn set_tag_filters(&mut self, filters: Option<Vec<Value>>) {
        self.set_json_array("tagFilters", filters);
    }

    /// Facet filter expressions, same nesting rules as `numericFilters`.
    pub fn facet_filters(&self) -> Option<Vec<Value>> {
        self.get_json_array("facetFilters")
    }

    pub fn set_facet_filters(&mut self, filters: Option<Vec<Value>>) {
        self.set_json_array("facetFilters", filters);
    }

    /// The unified SQL-like filter expression.
    pub fn filters(&self) -> Option<&str> {
        self.params.get("filters")
    }

    pub fn set_filters(&mut self, filters: Option<&str>) {
        self.set_str("filters", filters);
    }

    /// Deduplicate hits sharing the distinct attribute: keep this many.
    pub fn distinct(&self) -> Option<u64> {
        self.get_uint("distinct")
    }

    pub fn set_distinct(&mut self, value: Option<u64>) {
        self.set_uint("distinct", value);
    }

    /// Attributes to compute facet counts for.
    pub fn facets(&self) -> Option<Vec<String>> {
        self.get_string_list("facets")
    }

    pub fn set_facets(&mut self, facets: Option<Vec<String>>) {
        self.set_string_list("facets", facets);
    }

    pub fn max_values_per_facet(&self) -> Option<u64> {
        self.get_uint("maxValuesPerFacet")
    }

    pub fn set_max_values_per_facet(&mut self, value: Option<u64>) {
        self.set_uint("maxValuesPerFacet", value);
    }

    // -- Geo search ------------------------------------------------------

    /// Center the search on a point.
    pub fn around_lat_lng(&self) -> Option<GeoPoint> {
        self.params
            .get("aroundLatLng")
            .and_then(|raw| raw.parse().ok())
    }

    pub fn set_around_lat_lng(&mut self, point: Option<GeoPoint>) {
        self.params
            .set("aroundLatLng", point.map(|p| p.to_string()));
    }

    /// Center the search on the caller's IP geolocation instead of an
    /// explicit point.
    pub fn around_lat_lng_via_ip(&self) -> Option<bool> {
        self.get_bool("aroundLatLngViaIP")
    }

    pub fn set_around_lat_lng_via_ip(&mut self, enabled: Option<bool>) {
        self.set_bool("aroundLatLngViaIP", enabled);
    }

    /// Radius applied to around queries; see [`AroundRadius`] for the
    /// sentinel rules.
    pub fn around_radius(&self) -> Option<AroundRadius> {
        self.params
            .get("aroundRadius")
            .and_then(AroundRadius::from_wire)
    }

    pub fn set_around_radius(&mut self, radius: Option<AroundRadius>) {
        self.params.set("aroundRadius", radius.map(|r| r.to_wire()));
    }

    /// Granularity of the distance ranking, in meters.
    pub fn around_precision(&self) -> Option<u64> {
        self.get_uint("aroundPrecision")
    }

    pub fn set_around_precision(&mut self, meters: Option<u64>) {
        self.set_uint("aroundPrecision", meters);
    }

    /// Lower bound applied when the radius is computed automatically.
    pub fn minimum_around_radius(&self) -> Option<u64> {
        self.get_uint("minimumAroundRadius")
    }

    pub fn set_minimum_around_radius(&mut self, meters: Option<u64>) {
        self.set_uint("minimumAroundRadius", meters);
    }

    /// Restrict hits to one or more rectangles; the service ORs them
    /// together. Decoding is all-or-nothing: a field count that is not a
    /// multiple of 4, or any non-numeric field, reads as absent.
    pub fn inside_bounding_box(&self) -> Option<Vec<GeoRect>> {
        let fields = decode_float_list(self.params.get("insideBoundingBox")?)?;
        if fields.len() % 4 != 0 {
            return None;
        }
        Some(
            fields
                .chunks_exact(4)
                .map(|c| GeoRect::new(GeoPoint::new(c[0], c[1]), GeoPoint::new(c[2], c[3])))
                .collect(),
        )
    }

    pub fn set_inside_bounding_box(&mut self, boxes: Option<Vec<GeoRect>>) {
        self.params.set(
            "insideBoundingBox",
            boxes.map(|boxes| {
                boxes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            }),
        );
    }

    /// Restrict hits to a polygon.
    ///
    /// The flat encoding holds exactly one polygon per parameter; the
    /// one-value-per-key store cannot express the repeated-name form the
    /// wire protocol allows for several polygons.
    pub fn inside_polygon(&self) -> Option<Vec<GeoPoint>> {
        let fields = decode_float_list(self.params.get("insidePolygon")?)?;
        if fields.len() % 2 != 0 || fields.len() < 6 {
            return None;
        }
        Some(
            fields
                .chunks_exact(2)
                .map(|c| GeoPoint::new(c[0], c[1]))
                .collect(),
        )
    }

    /// Set the polygon restriction.
    ///
    /// # Panics
    ///
    /// Fewer than 3 vertices is caller misuse, not bad external input,
    /// and panics.
    pub fn set_inside_polygon(&mut self, polygon: Option<Vec<GeoPoint>>) {
        self.params.set(
            "insidePolygon",
            polygon.map(|points| {
                assert!(points.len() >= 3, "insidePolygon requires at least 3 vertices");
                points
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            }),
        );
    }
}

impl fmt::Display for Query {
    /// The canonical wire form, as [`build`](Query::build) produces it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert!(Query::new().parameters().is_empty());

        let q = Query::with_query("phone");
        assert_eq!(q.query(), Some("phone"));

        let mut map = BTreeMap::new();
        map.insert("unmodeledParam".to_string(), "42".to_string());
        let q = Query::from_parameters(map);
        assert_eq!(q.get("unmodeledParam"), Some("42"));
    }

    #[test]
    fn string_accessors_round_trip() {
        let mut q = Query::new();
        q.set_query(Some("laptop"));
        assert_eq!(q.query(), Some("laptop"));
        assert_eq!(q.get("query"), Some("laptop"));
        q.set_query(None);
        assert_eq!(q.query(), None);

        q.set_filters(Some("price > 100 AND available:true"));
        assert_eq!(q.filters(), Some("price > 100 AND available:true"));

        q.set_highlight_pre_tag(Some("<em>"));
        q.set_highlight_post_tag(Some("</em>"));
        q.set_snippet_ellipsis_text(Some("…"));
        assert_eq!(q.highlight_pre_tag(), Some("<em>"));
        assert_eq!(q.highlight_post_tag(), Some("</em>"));
        assert_eq!(q.snippet_ellipsis_text(), Some("…"));
    }

    #[test]
    fn uint_accessors_round_trip_including_bounds() {
        let mut q = Query::new();
        q.set_page(Some(0));
        assert_eq!(q.page(), Some(0));
        q.set_page(Some(u64::MAX));
        assert_eq!(q.page(), Some(u64::MAX));
        assert_eq!(q.get("page"), Some("18446744073709551615"));

        q.set_hits_per_page(Some(50));
        q.set_distinct(Some(1));
        q.set_max_values_per_facet(Some(10));
        q.set_min_proximity(Some(3));
        assert_eq!(q.hits_per_page(), Some(50));
        assert_eq!(q.distinct(), Some(1));
        assert_eq!(q.max_values_per_facet(), Some(10));
        assert_eq!(q.min_proximity(), Some(3));
    }

    #[test]
    fn uint_getter_is_permissive_about_garbage() {
        let mut q = Query::new();
        q.set("page", Some("-3".to_string()));
        assert_eq!(q.page(), None);
        // the raw value is untouched and still reachable
        assert_eq!(q.get("page"), Some("-3"));
    }

    #[test]
    fn bool_accessors_round_trip() {
        let mut q = Query::new();
        q.set_analytics(Some(false));
        assert_eq!(q.analytics(), Some(false));
        assert_eq!(q.get("analytics"), Some("false"));

        q.set_advanced_syntax(Some(true));
        assert_eq!(q.get("advancedSyntax"), Some("true"));

        // integer and case-insensitive forms decode too
        q.set("getRankingInfo", Some("1".to_string()));
        assert_eq!(q.get_ranking_info(), Some(true));
        q.set("synonyms", Some("TRUE".to_string()));
        assert_eq!(q.synonyms(), Some(true));
        q.set("ignorePlurals", Some("yes".to_string()));
        assert_eq!(q.ignore_plurals(), None);
    }

    #[test]
    fn enum_accessors_round_trip_and_ignore_unknown_tags() {
        let mut q = Query::new();
        q.set_query_type(Some(QueryType::PrefixAll));
        assert_eq!(q.query_type(), Some(QueryType::PrefixAll));
        assert_eq!(q.get("queryType"), Some("prefixAll"));

        q.set_typo_tolerance(Some(TypoTolerance::Strict));
        assert_eq!(q.typo_tolerance(), Some(TypoTolerance::Strict));

        q.set_remove_words_if_no_results(Some(RemoveWordsIfNoResults::AllOptional));
        assert_eq!(
            q.remove_words_if_no_results(),
            Some(RemoveWordsIfNoResults::AllOptional)
        );

        q.set_exact_on_single_word_query(Some(ExactOnSingleWordQuery::Attribute));
        assert_eq!(
            q.exact_on_single_word_query(),
            Some(ExactOnSingleWordQuery::Attribute)
        );

        q.set("queryType", Some("somethingNew".to_string()));
        assert_eq!(q.query_type(), None);
        assert_eq!(q.get("queryType"), Some("somethingNew"));
    }

    #[test]
    fn string_list_accessors_round_trip() {
        let mut q = Query::new();
        q.set_attributes_to_retrieve(Some(vec!["name".to_string(), "price".to_string()]));
        assert_eq!(
            q.attributes_to_retrieve(),
            Some(vec!["name".to_string(), "price".to_string()])
        );
        // the outgoing encoding is the comma form, not JSON
        assert_eq!(q.get("attributesToRetrieve"), Some("name,price"));

        // a JSON-array raw value decodes preferentially as JSON
        q.set("attributesToRetrieve", Some(r#"["name","price"]"#.to_string()));
        assert_eq!(
            q.attributes_to_retrieve(),
            Some(vec!["name".to_string(), "price".to_string()])
        );

        q.set_facets(Some(Vec::new()));
        assert_eq!(q.facets(), Some(Vec::new()));

        q.set_optional_words(Some(vec!["the".to_string()]));
        q.set_analytics_tags(Some(vec!["web".to_string(), "beta".to_string()]));
        q.set_restrict_searchable_attributes(Some(vec!["title".to_string()]));
        q.set_disable_typo_tolerance_on_attributes(Some(vec!["sku".to_string()]));
        q.set_attributes_to_highlight(Some(vec!["title".to_string()]));
        q.set_attributes_to_snippet(Some(vec!["content:20".to_string()]));
        assert_eq!(q.optional_words(), Some(vec!["the".to_string()]));
        assert_eq!(
            q.analytics_tags(),
            Some(vec!["web".to_string(), "beta".to_string()])
        );
        assert_eq!(
            q.restrict_searchable_attributes(),
            Some(vec!["title".to_string()])
        );
        assert_eq!(
            q.disable_typo_tolerance_on_attributes(),
            Some(vec!["sku".to_string()])
        );
        assert_eq!(q.attributes_to_highlight(), Some(vec!["title".to_string()]));
        assert_eq!(
            q.attributes_to_snippet(),
            Some(vec!["content:20".to_string()])
        );
    }

    #[test]
    fn json_array_accessors_round_trip() {
        use serde_json::json;

        let mut q = Query::new();
        let filters = vec![json!("price>100"), json!(["size=7", "size=9"])];
        q.set_numeric_filters(Some(filters.clone()));
        assert_eq!(q.numeric_filters(), Some(filters));
        assert_eq!(
            q.get("numericFilters"),
            Some(r#"["price>100",["size=7","size=9"]]"#)
        );

        q.set_tag_filters(Some(vec![json!("published")]));
        assert_eq!(q.tag_filters(), Some(vec![json!("published")]));

        q.set_facet_filters(Some(Vec::new()));
        assert_eq!(q.facet_filters(), Some(Vec::new()));
        assert_eq!(q.get("facetFilters"), Some("[]"));

        q.set("tagFilters", Some("not json".to_string()));
        assert_eq!(q.tag_filters(), None);
        assert_eq!(q.get("tagFilters"), Some("not json"));
    }

    #[test]
    fn alternatives_as_exact_drops_unknown_tags() {
        let mut q = Query::new();
        q.set_alternatives_as_exact(Some(vec![
            AlternativesAsExact::IgnorePlurals,
            AlternativesAsExact::MultiWordsSynonym,
        ]));
        assert_eq!(
            q.get("alternativesAsExact"),
            Some("ignorePlurals,multiWordsSynonym")
        );
        assert_eq!(
            q.alternatives_as_exact(),
            Some(vec![
                AlternativesAsExact::IgnorePlurals,
                AlternativesAsExact::MultiWordsSynonym,
            ])
        );

        q.set(
            "alternativesAsExact",
            Some("ignorePlurals,someFutureTag".to_string()),
        );
        assert_eq!(
            q.alternatives_as_exact(),
            Some(vec![AlternativesAsExact::IgnorePlurals])
        );

        q.set_alternatives_as_exact(Some(Vec::new()));
        assert_eq!(q.alternatives_as_exact(), Some(Vec::new()));
    }

    #[test]
    fn stop_words_round_trips_both_variants() {
        let mut q = Query::new();
        q.set_remove_stop_words(Some(RemoveStopWords::All(true)));
        assert_eq!(q.get("removeStopWords"), Some("true"));
        // decodes back as the blanket toggle, never a language list
        assert_eq!(q.remove_stop_words(), Some(RemoveStopWords::All(true)));

        q.set_remove_stop_words(Some(RemoveStopWords::Selected(vec![
            "en".to_string(),
            "fr".to_string(),
        ])));
        assert_eq!(q.get("removeStopWords"), Some("en,fr"));
        assert_eq!(
            q.remove_stop_words(),
            Some(RemoveStopWords::Selected(vec![
                "en".to_string(),
                "fr".to_string()
            ]))
        );
    }

    #[test]
    fn around_radius_sentinel_rules() {
        let mut q = Query::new();
        q.set_around_radius(Some(AroundRadius::All));
        assert_eq!(q.get("aroundRadius"), Some("all"));
        assert_eq!(q.around_radius(), Some(AroundRadius::All));

        q.set_around_radius(Some(AroundRadius::Explicit(50)));
        assert_eq!(q.get("aroundRadius"), Some("50"));
        assert_eq!(q.around_radius(), Some(AroundRadius::Explicit(50)));

        q.set("aroundRadius", Some("soon".to_string()));
        assert_eq!(q.around_radius(), None);
    }

    #[test]
    fn around_lat_lng_round_trips() {
        let mut q = Query::new();
        q.set_around_lat_lng(Some(GeoPoint::new(48.8566, 2.3522)));
        assert_eq!(q.get("aroundLatLng"), Some("48.8566,2.3522"));
        assert_eq!(q.around_lat_lng(), Some(GeoPoint::new(48.8566, 2.3522)));

        q.set("aroundLatLng", Some("48.85,2.35,9.99".to_string()));
        assert_eq!(q.around_lat_lng(), None);

        q.set_around_lat_lng_via_ip(Some(true));
        assert_eq!(q.around_lat_lng_via_ip(), Some(true));
        q.set_around_precision(Some(100));
        q.set_minimum_around_radius(Some(20));
        assert_eq!(q.around_precision(), Some(100));
        assert_eq!(q.minimum_around_radius(), Some(20));
    }

    #[test]
    fn bounding_box_encodes_flat_quadruples() {
        let mut q = Query::new();
        let boxes = vec![
            GeoRect::new(GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)),
            GeoRect::new(GeoPoint::new(5.0, 6.0), GeoPoint::new(7.0, 8.0)),
        ];
        q.set_inside_bounding_box(Some(boxes.clone()));
        assert_eq!(
            q.get("insideBoundingBox"),
            Some("1.0,2.0,3.0,4.0,5.0,6.0,7.0,8.0")
        );
        assert_eq!(q.inside_bounding_box(), Some(boxes));
    }

    #[test]
    fn bounding_box_decode_is_all_or_nothing() {
        let mut q = Query::new();
        // field count not a multiple of 4
        q.set("insideBoundingBox", Some("1,2,3,4,5".to_string()));
        assert_eq!(q.inside_bounding_box(), None);
        // one bad field poisons the whole list, including the valid quadruple
        q.set("insideBoundingBox", Some("1,2,3,4,5,6,7,x".to_string()));
        assert_eq!(q.inside_bounding_box(), None);
    }

    #[test]
    fn polygon_round_trips() {
        let mut q = Query::new();
        let polygon = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ];
        q.set_inside_polygon(Some(polygon.clone()));
        assert_eq!(q.get("insidePolygon"), Some("0.0,0.0,0.0,1.0,1.0,1.0"));
        assert_eq!(q.inside_polygon(), Some(polygon));

        // odd field count or too few points reads as absent
        q.set("insidePolygon", Some("1,2,3".to_string()));
        assert_eq!(q.inside_polygon(), None);
        q.set("insidePolygon", Some("1,2,3,4".to_string()));
        assert_eq!(q.inside_polygon(), None);
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn polygon_with_two_points_is_a_programming_error() {
        let mut q = Query::new();
        q.set_inside_polygon(Some(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]));
    }

    #[test]
    fn equality_is_structural_and_clone_is_deep() {
        let mut a = Query::with_query("a");
        a.set_page(Some(2));
        let mut b = Query::new();
        b.set_page(Some(2));
        b.set_query(Some("a"));
        assert_eq!(a, b);

        let mut c = a.clone();
        c.set_page(Some(3));
        assert_eq!(a.page(), Some(2));
        assert_ne!(a, c);
    }

    #[test]
    fn display_renders_the_wire_form() {
        let mut q = Query::with_query("a");
        q.set_page(Some(2));
        assert_eq!(q.to_string(), "page=2&query=a");
    }
}

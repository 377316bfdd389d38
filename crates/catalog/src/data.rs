//! Regional plant table. Records are placeholders per broad region; several
//! invasive entries suggest natives that have no record of their own.

use shared::domain::{InvasiveRecord, PlantRecord};

use crate::Region;

pub(crate) struct NativeEntry {
    common_name: &'static str,
    scientific_name: &'static str,
    description: &'static str,
    image_seed: &'static str,
    growing_conditions: &'static str,
    ecosystem_benefits: &'static str,
    bloom_time: &'static str,
    maintenance: &'static str,
}

pub(crate) struct InvasiveEntry {
    common_name: &'static str,
    scientific_name: &'static str,
    description: &'static str,
    image_seed: &'static str,
    native_alternatives: &'static [&'static str],
}

fn image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/400/300")
}

impl NativeEntry {
    pub(crate) fn to_record(&self) -> PlantRecord {
        PlantRecord {
            common_name: self.common_name.to_string(),
            scientific_name: self.scientific_name.to_string(),
            description: self.description.to_string(),
            image_url: image_url(self.image_seed),
            growing_conditions: self.growing_conditions.to_string(),
            ecosystem_benefits: self.ecosystem_benefits.to_string(),
            bloom_time: self.bloom_time.to_string(),
            maintenance: self.maintenance.to_string(),
        }
    }
}

impl InvasiveEntry {
    pub(crate) fn to_record(&self) -> InvasiveRecord {
        InvasiveRecord {
            common_name: self.common_name.to_string(),
            scientific_name: self.scientific_name.to_string(),
            description: self.description.to_string(),
            image_url: image_url(self.image_seed),
            native_alternatives: self
                .native_alternatives
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

pub(crate) fn natives_for(region: Region) -> &'static [NativeEntry] {
    match region {
        Region::Northeast => NORTHEAST_NATIVES,
        Region::Southeast => SOUTHEAST_NATIVES,
        Region::Midwest => MIDWEST_NATIVES,
        Region::SouthCentral => SOUTH_CENTRAL_NATIVES,
        Region::Mountain => MOUNTAIN_NATIVES,
        Region::Pacific => PACIFIC_NATIVES,
    }
}

pub(crate) fn invasives_for(region: Region) -> &'static [InvasiveEntry] {
    match region {
        Region::Northeast => NORTHEAST_INVASIVES,
        Region::Southeast => SOUTHEAST_INVASIVES,
        Region::Midwest => MIDWEST_INVASIVES,
        Region::SouthCentral => SOUTH_CENTRAL_INVASIVES,
        Region::Mountain => MOUNTAIN_INVASIVES,
        Region::Pacific => PACIFIC_INVASIVES,
    }
}

const NORTHEAST_NATIVES: &[NativeEntry] = &[
    NativeEntry {
        common_name: "Blue Flax",
        scientific_name: "Linum lewisii",
        description: "A perennial wildflower with delicate sky-blue flowers that bloom throughout the summer. Drought-tolerant once established.",
        image_seed: "blueflax",
        growing_conditions: "Full sun. Prefers well-drained sandy or loamy soil. Low water needs once established.",
        ecosystem_benefits: "Attracts bees and butterflies. Seeds provide food for birds.",
        bloom_time: "Late Spring to Mid-Summer",
        maintenance: "Minimal. Cut back spent flower stalks if desired. May self-seed.",
    },
    NativeEntry {
        common_name: "Serviceberry",
        scientific_name: "Amelanchier canadensis",
        description: "A large shrub or small tree with clusters of white spring flowers followed by edible purplish-red berries.",
        image_seed: "serviceberry",
        growing_conditions: "Full sun to partial shade. Adaptable to various well-drained soils, prefers moist, acidic soil.",
        ecosystem_benefits: "Early spring nectar source for pollinators (bees). Berries are a valuable food source for birds (e.g., Cedar Waxwings) and mammals.",
        bloom_time: "Early Spring",
        maintenance: "Generally low. Prune after flowering if needed to shape or remove dead wood. Water during prolonged drought.",
    },
    NativeEntry {
        common_name: "Wild Lupine",
        scientific_name: "Lupinus perennis",
        description: "A beautiful perennial with spikes of purple-blue flowers. Host plant for the Karner blue butterfly caterpillar.",
        image_seed: "wildlupine",
        growing_conditions: "Full sun. Requires dry, sandy, well-drained, low-nutrient soil. Does not tolerate rich soil or transplanting well.",
        ecosystem_benefits: "Critical host plant for endangered Karner blue butterfly larvae. Flowers attract various pollinators (bees, butterflies).",
        bloom_time: "Late Spring to Early Summer",
        maintenance: "Very low. Avoid fertilization. Difficult to establish from nursery stock; best grown from seed.",
    },
    NativeEntry {
        common_name: "Eastern Redbud",
        scientific_name: "Cercis canadensis",
        description: "Small deciduous tree famed for its profusion of magenta buds and pink flowers in early spring before the leaves emerge. Heart-shaped leaves.",
        image_seed: "redbud",
        growing_conditions: "Full sun to light shade (best flowering in sun). Prefers moist, well-drained soils but adaptable.",
        ecosystem_benefits: "Early nectar source for bees (especially bumblebees) and other pollinators. Seeds eaten by some birds.",
        bloom_time: "Early Spring",
        maintenance: "Minimal pruning needed, usually just to remove dead or crossing branches. Relatively pest/disease resistant.",
    },
];

const SOUTHEAST_NATIVES: &[NativeEntry] = &[
    NativeEntry {
        common_name: "Southern Magnolia",
        scientific_name: "Magnolia grandiflora",
        description: "Large evergreen tree with huge, fragrant white flowers and glossy dark green leaves. Can be messy (leaf/petal drop).",
        image_seed: "magnolia",
        growing_conditions: "Full sun to partial shade. Prefers rich, moist, well-drained acidic soil. Tolerates clay.",
        ecosystem_benefits: "Provides dense shelter and nesting sites for birds. Seeds eaten by wildlife (birds, squirrels).",
        bloom_time: "Late Spring to Summer (sporadically)",
        maintenance: "Water regularly when young. Pruning usually not required. Rake fallen leaves/petals if desired.",
    },
    NativeEntry {
        common_name: "Oakleaf Hydrangea",
        scientific_name: "Hydrangea quercifolia",
        description: "Deciduous shrub with large, oak-shaped leaves, conical clusters of white flowers (aging to pink), and excellent reddish-purple fall color. Peeling bark adds winter interest.",
        image_seed: "oakleafhydrangea",
        growing_conditions: "Partial shade to full shade (morning sun is ideal). Prefers moist, fertile, well-drained soil.",
        ecosystem_benefits: "Provides cover for wildlife. Flowers attract pollinators (bees).",
        bloom_time: "Late Spring to Mid-Summer",
        maintenance: "Blooms on old wood; prune immediately after flowering only if necessary. Water during dry periods. Minimal pests.",
    },
    NativeEntry {
        common_name: "Gulf Coast Muhly Grass",
        scientific_name: "Muhlenbergia capillaris",
        description: "A stunning ornamental grass known for its airy plumes of pinkish-purple flowers that create a \"cloud\" effect in the fall.",
        image_seed: "muhlygrass",
        growing_conditions: "Full sun to light shade. Adaptable to most soils (sand, loam, clay), prefers well-drained. Drought and heat tolerant.",
        ecosystem_benefits: "Provides nesting material and cover for birds. Seeds eaten by small birds. Attracts beneficial insects.",
        bloom_time: "Fall (Flowers)",
        maintenance: "Very low. Cut back foliage in late winter/early spring before new growth emerges.",
    },
];

const MIDWEST_NATIVES: &[NativeEntry] = &[
    NativeEntry {
        common_name: "Purple Coneflower",
        scientific_name: "Echinacea purpurea",
        description: "Popular perennial with daisy-like purple-pink flowers featuring a prominent, spiny central cone. Blooms through summer.",
        image_seed: "coneflower",
        growing_conditions: "Full sun to light shade. Adaptable to various soils but prefers well-drained loam. Drought tolerant once established.",
        ecosystem_benefits: "Excellent nectar source for butterflies (Monarchs, Fritillaries) and bees. Seeds feed goldfinches and other birds over winter.",
        bloom_time: "Early Summer to Fall",
        maintenance: "Low. Deadhead spent flowers to encourage more blooms, or leave seed heads for birds. Divide clumps every few years if needed.",
    },
    NativeEntry {
        common_name: "Switchgrass",
        scientific_name: "Panicum virgatum",
        description: "Tall native grass forming dense clumps with airy flower panicles in late summer. Good fall color and winter structure.",
        image_seed: "switchgrass",
        growing_conditions: "Full sun. Highly adaptable to wet or dry soils, including clay.",
        ecosystem_benefits: "Provides important cover and nesting habitat for grassland birds and small mammals. Host plant for some skipper butterflies.",
        bloom_time: "Late Summer (Flowers)",
        maintenance: "Very low. Cut back foliage in late winter or early spring before new growth.",
    },
    NativeEntry {
        common_name: "Quaking Aspen",
        scientific_name: "Populus tremuloides",
        description: "A fast-growing deciduous tree known for its smooth white bark and leaves that tremble in the slightest breeze. Forms beautiful groves via root suckers.",
        image_seed: "quakingaspen",
        growing_conditions: "Full sun to partial shade. Prefers moist, well-drained soil but is adaptable. Needs space.",
        ecosystem_benefits: "Provides habitat and food (bark, twigs, buds) for numerous wildlife species, including birds, deer, elk, moose, and beaver. Host for various insects.",
        bloom_time: "Spring (Catkins)",
        maintenance: "Can be short-lived (50-100 years). Prone to various pests and diseases. Spreads aggressively by suckers, which may require management in small landscapes.",
    },
];

const SOUTH_CENTRAL_NATIVES: &[NativeEntry] = &[
    NativeEntry {
        common_name: "Texas Sage",
        scientific_name: "Leucophyllum frutescens",
        description: "An evergreen shrub with silvery-gray foliage and periodic bursts of vibrant purple flowers, often blooming profusely after summer rains.",
        image_seed: "texassage",
        growing_conditions: "Full sun essential. Requires excellent drainage (rocky or sandy soil). Extremely drought and heat tolerant.",
        ecosystem_benefits: "Flowers attract bees, butterflies, and hummingbirds. Provides cover for small desert wildlife.",
        bloom_time: "Summer to Fall (Episodic, often after rain)",
        maintenance: "Very low. Avoid overwatering. Prune lightly only if needed to shape; avoid heavy shearing.",
    },
    NativeEntry {
        common_name: "Desert Willow",
        scientific_name: "Chilopsis linearis",
        description: "A small, vase-shaped deciduous tree or large shrub with narrow, willow-like leaves and showy, fragrant, trumpet-shaped flowers in shades of pink and purple.",
        image_seed: "desertwillow",
        growing_conditions: "Full sun. Requires well-drained soil. Very drought tolerant once established.",
        ecosystem_benefits: "Important nectar source for hummingbirds and bees. Larval host plant for some moths (e.g., White-lined Sphinx).",
        bloom_time: "Late Spring to Fall",
        maintenance: "Low. Water deeply but infrequently. Prune in late winter to shape and remove seed pods if desired (though birds may eat seeds).",
    },
    NativeEntry {
        common_name: "Mealy Blue Sage",
        scientific_name: "Salvia farinacea",
        description: "A reliable perennial sage with numerous spikes of intense blue flowers rising above gray-green foliage throughout the summer and fall.",
        image_seed: "mealybluesage",
        growing_conditions: "Full sun. Prefers average, well-drained soil. Tolerant of heat and moderate drought.",
        ecosystem_benefits: "Long blooming period provides sustained nectar for bees, butterflies, and hummingbirds.",
        bloom_time: "Late Spring to Frost",
        maintenance: "Low. Deadhead spent flower spikes to promote reblooming. Cut back in late winter.",
    },
];

const MOUNTAIN_NATIVES: &[NativeEntry] = &[
    NativeEntry {
        common_name: "Rocky Mountain Penstemon",
        scientific_name: "Penstemon strictus",
        description: "Showy perennial forming clumps of glossy green leaves with tall spikes of vibrant blue-purple, tubular flowers in early summer. A favorite for hummingbirds.",
        image_seed: "penstemon",
        growing_conditions: "Full sun. Requires well-drained soil, prefers gravelly or sandy conditions. Very drought tolerant once established.",
        ecosystem_benefits: "Important nectar source for hummingbirds, native bees (especially bumblebees), and butterflies.",
        bloom_time: "Early to Mid-Summer",
        maintenance: "Low. Avoid rich soils and overwatering. Cut back flower stalks after blooming if desired. May be short-lived but often self-seeds.",
    },
    NativeEntry {
        common_name: "Apache Plume",
        scientific_name: "Fallugia paradoxa",
        description: "A medium-sized shrub with delicate white rose-like flowers followed by attractive, feathery, pinkish seed heads that persist and create a plume effect.",
        image_seed: "apacheplume",
        growing_conditions: "Full sun. Requires excellent drainage (rocky or sandy soil). Very drought tolerant and heat tolerant.",
        ecosystem_benefits: "Provides nectar for bees. Feathery seeds aid dispersal. Offers cover for desert wildlife.",
        bloom_time: "Spring to Fall (Flowers intermittently)",
        maintenance: "Very low. Water infrequently once established. Prune minimally if needed for shaping.",
    },
    NativeEntry {
        common_name: "Blue Grama Grass",
        scientific_name: "Bouteloua gracilis",
        description: "A warm-season ornamental grass highly valued for its unique, horizontal seed heads resembling tiny combs or eyelashes, held on arching stems. Fine, gray-green foliage.",
        image_seed: "bluegrama",
        growing_conditions: "Full sun. Prefers well-drained soil (sandy, loamy, clay). Extremely drought tolerant and adaptable.",
        ecosystem_benefits: "Provides forage for wildlife. Larval host plant for several skipper butterflies. Seeds eaten by birds.",
        bloom_time: "Summer (Seed heads)",
        maintenance: "Very low. Leave foliage and seed heads for winter interest. Cut back in early spring before new growth.",
    },
];

const PACIFIC_NATIVES: &[NativeEntry] = &[
    NativeEntry {
        common_name: "California Poppy",
        scientific_name: "Eschscholzia californica",
        description: "The iconic state flower of California, an annual or short-lived perennial known for its vibrant orange, cup-shaped flowers that close at night and on cloudy days. Reseeds readily.",
        image_seed: "capoppy",
        growing_conditions: "Full sun. Requires excellent drainage; prefers sandy, poor soil. Very drought tolerant. Best in cool seasons.",
        ecosystem_benefits: "Attracts native bees and other pollinators seeking pollen (offers little nectar).",
        bloom_time: "Spring to Early Summer (longer in cool coastal areas)",
        maintenance: "Minimal. Water sparingly. Allow seeds to mature and scatter for reseeding. Deadheading can prolong bloom but prevents reseeding.",
    },
    NativeEntry {
        common_name: "Coast Live Oak",
        scientific_name: "Quercus agrifolia",
        description: "A majestic evergreen oak tree native to the California coast ranges. Forms a broad, dense, rounded canopy with dark green, holly-like leaves.",
        image_seed: "coastliveoak",
        growing_conditions: "Full sun to partial shade. Prefers well-drained soil but adaptable. Very drought tolerant once established (after ~3-5 years).",
        ecosystem_benefits: "Keystone species providing critical habitat and acorns (food) for a vast array of wildlife (birds, mammals, insects). Supports hundreds of caterpillar species, feeding birds.",
        bloom_time: "Spring (Inconspicuous flowers)",
        maintenance: "Water deeply but infrequently when young. Mature trees need no supplemental water. Prune only if necessary for structure or safety, preferably by a certified arborist. Avoid summer watering near the trunk.",
    },
    NativeEntry {
        common_name: "Toyon",
        scientific_name: "Heteromeles arbutifolia",
        description: "An evergreen shrub or small tree, also known as California Holly or Christmas Berry, with glossy green, serrated leaves, clusters of small white summer flowers, and large clusters of bright red berries in winter.",
        image_seed: "toyon",
        growing_conditions: "Full sun to partial shade. Adaptable to various soils (clay, loam, sand) but needs decent drainage. Drought tolerant once established.",
        ecosystem_benefits: "Flowers attract numerous pollinators (bees, flies, butterflies). Winter berries are a vital food source for birds like Cedar Waxwings, Robins, and Mockingbirds.",
        bloom_time: "Summer",
        maintenance: "Low. Water occasionally during the first few years. Prune after berry season if needed for shaping or size control.",
    },
    NativeEntry {
        common_name: "California Buckwheat",
        scientific_name: "Eriogonum fasciculatum var. foliolosum",
        description: "A hardy, rounded evergreen shrub with small, needle-like green leaves and abundant flattish clusters of tiny white to pinkish flowers that bloom over a long period. Flowers dry to a rusty brown, providing winter interest.",
        image_seed: "cabuckwheat",
        growing_conditions: "Full sun essential. Requires well-drained soil, thrives in poor, dry, rocky or sandy soils. Very drought tolerant.",
        ecosystem_benefits: "Extremely important \"pollinator magnet,\" providing abundant nectar for bees, butterflies, flies, and other beneficial insects. Seeds feed birds (e.g., quail, sparrows). Larval host for several butterfly species.",
        bloom_time: "Spring to Fall (Long blooming period)",
        maintenance: "Very low. Needs no supplemental water once established. Cut back spent flower heads in late fall/winter if desired, or leave for birds and winter interest.",
    },
];

const NORTHEAST_INVASIVES: &[InvasiveEntry] = &[
    InvasiveEntry {
        common_name: "Japanese Knotweed",
        scientific_name: "Reynoutria japonica",
        description: "Aggressive perennial forming dense thickets, displacing native vegetation. Spreads rapidly via rhizomes and can damage infrastructure.",
        image_seed: "knotweed",
        native_alternatives: &["Serviceberry", "Eastern Redbud"],
    },
    InvasiveEntry {
        common_name: "Garlic Mustard",
        scientific_name: "Alliaria petiolata",
        description: "Biennial herb that invades forest understories, outcompeting native wildflowers and altering soil chemistry.",
        image_seed: "garlicmustard",
        native_alternatives: &["Wild Ginger", "Foamflower"],
    },
];

const SOUTHEAST_INVASIVES: &[InvasiveEntry] = &[
    InvasiveEntry {
        common_name: "Kudzu",
        scientific_name: "Pueraria montana var. lobata",
        description: "Rapidly growing vine that smothers trees and other vegetation, creating dense monocultures.",
        image_seed: "kudzu",
        native_alternatives: &["Trumpet Vine", "Crossvine"],
    },
    InvasiveEntry {
        common_name: "Chinese Privet",
        scientific_name: "Ligustrum sinense",
        description: "Evergreen shrub forming dense thickets in forests and along waterways, displacing native understory plants.",
        image_seed: "privet",
        native_alternatives: &["Oakleaf Hydrangea", "Wax Myrtle"],
    },
];

const MIDWEST_INVASIVES: &[InvasiveEntry] = &[
    InvasiveEntry {
        common_name: "Common Buckthorn",
        scientific_name: "Rhamnus cathartica",
        description: "Tall shrub or small tree invading woodlands and prairies. Alters soil nitrogen levels and hosts pests.",
        image_seed: "buckthorn",
        native_alternatives: &["Serviceberry", "Nannyberry"],
    },
    InvasiveEntry {
        common_name: "Bush Honeysuckle",
        scientific_name: "Lonicera spp. (non-native)",
        description: "Several invasive honeysuckle species form dense thickets, shading out native plants and reducing forest regeneration.",
        image_seed: "honeysuckle",
        native_alternatives: &["American Elderberry", "Ninebark"],
    },
];

const SOUTH_CENTRAL_INVASIVES: &[InvasiveEntry] = &[
    InvasiveEntry {
        common_name: "Giant Reed",
        scientific_name: "Arundo donax",
        description: "Very tall grass that invades riparian areas, consumes large amounts of water, and increases fire risk.",
        image_seed: "giantreed",
        native_alternatives: &["Switchgrass", "Big Bluestem"],
    },
    InvasiveEntry {
        common_name: "Salt Cedar (Tamarisk)",
        scientific_name: "Tamarix spp.",
        description: "Shrubs or trees invading riverbanks and arid lands, increasing soil salinity and outcompeting native vegetation.",
        image_seed: "saltcedar",
        native_alternatives: &["Desert Willow", "Screwbean Mesquite"],
    },
];

const MOUNTAIN_INVASIVES: &[InvasiveEntry] = &[
    InvasiveEntry {
        common_name: "Russian Knapweed",
        scientific_name: "Acroptilon repens",
        description: "Perennial forb invading rangelands and fields, toxic to horses, and difficult to control due to extensive root system.",
        image_seed: "knapweed",
        native_alternatives: &["Rocky Mountain Penstemon", "Showy Milkweed"],
    },
    InvasiveEntry {
        common_name: "Cheatgrass",
        scientific_name: "Bromus tectorum",
        description: "Annual grass that dominates arid lands, increasing fire frequency and outcompeting native bunchgrasses.",
        image_seed: "cheatgrass",
        native_alternatives: &["Blue Grama Grass", "Indian Ricegrass"],
    },
];

const PACIFIC_INVASIVES: &[InvasiveEntry] = &[
    InvasiveEntry {
        common_name: "English Ivy",
        scientific_name: "Hedera helix",
        description: "Evergreen vine that climbs trees, eventually weakening or killing them, and forms dense groundcover excluding natives.",
        image_seed: "englishivy",
        native_alternatives: &["Western Wild Ginger", "Evergreen Huckleberry"],
    },
    InvasiveEntry {
        common_name: "Pampas Grass",
        scientific_name: "Cortaderia selloana",
        description: "Large ornamental grass that escapes cultivation and invades coastal areas and disturbed sites, posing a fire hazard.",
        image_seed: "pampas",
        native_alternatives: &["California Fescue", "Deer Grass"],
    },
];

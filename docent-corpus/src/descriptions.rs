//! Curated per-room descriptors for the classifier.
//!
//! Keys must match `scope_id` values in the ingested corpus. Rooms without
//! an entry fall back to heading + leading text. The descriptors spell out
//! what each room is NOT about, because neighbouring rooms overlap
//! thematically and the classifier needs the boundaries.

/// Fallback descriptor: heading plus this many leading characters of text.
pub const FALLBACK_DESC_CHARS: usize = 240;

pub const ROOM_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "GDA-Sala-1",
        "Chronological overview of Abruzzo prehistory and protohistory, from Homo \
         erectus and Neanderthals to Homo sapiens, the Mesolithic crisis, the \
         Neolithic agricultural revolution, and the Copper, Bronze and Iron Ages. \
         ONLY very ancient periods before the Roman Empire: early humans, stone \
         tools, the first Neolithic farmers and herders, impressed pottery, the \
         first huts and villages, metallurgy and Italic warrior societies. Use for \
         ANY question about the diet or daily life of Paleolithic, Mesolithic, \
         Neolithic, Bronze or Iron Age people, Italic tribes, the Social War, or \
         the collapse of Roman order — NOT the later contadini or 19th–20th \
         century farmers.",
    ),
    (
        "GDA-Sala-2",
        "Thematic room on the sacred use of caves in Abruzzo: natural grottoes as \
         places of worship, ritual pits and stone circles linked to the cult of \
         Mother Earth from the Neolithic onward. Includes the Grotta dei Piccioni \
         with ritual deposits and child sacrifices, ex-votos in ceramic, stone and \
         bone, and the continuity of pagan rites into Christian worship by hermit \
         monks and saints such as Saint Michael the Archangel. Cave sanctuaries, \
         healing linked to rock and water, pilgrimages to eremi — religious \
         practice, not everyday dwelling or farming.",
    ),
    (
        "GDA-Sala-3",
        "Continuity of objects, symbols and rituals from prehistory to the \
         twentieth century in Abruzzese popular culture: ancient amulets and \
         protective devices surviving in rural and Christian forms. Everyday tools \
         such as ricottiere, lucerne, fusi and trapani a volano alongside \
         magical-ritual objects like ciprea shells, cornetti, arrowhead pendants \
         and apotropaic faces on buildings, plus festivals with prehistoric roots: \
         solstice fires, carnival figures, the ballo della pupa, Easter pastries \
         shaped as hearts, dolls and horses. Complements but does not duplicate \
         the textiles of GDA-Sala-11 or the marriage jewelry of GDA-Sala-12.",
    ),
    (
        "GDA-Sala-4",
        "Clothing, equipment and everyday world of Abruzzo shepherds: sheepskin \
         jackets, leather leggings, chiochie sandals, staffs, slings, umbrellas \
         and bags for a hard outdoor life on the move with flocks. The shepherd as \
         artisan and warrior: the mazza chiodata, the mazzafionne sling inherited \
         from Italic slingers, carved wooden furniture and gifts, zampogna and \
         ciaramella, and the Pastore Abruzzese-Maremmano dog with its spiked \
         collar. NOT the architecture of stone huts (GDA-Sala-5, GDA-Sala-6) or \
         the legal aspects of transhumance.",
    ),
    (
        "GDA-Sala-5",
        "The stone pastoral huts known as tholos and the world of transhumant \
         shepherding: why shepherds needed dry-stone shelters in high mountains, \
         how they were built without mortar, and how monticazione favoured this \
         architecture. Models and photographs of tholos villages on the Maiella \
         and Gran Sasso, documents on the sheep economy, maps of tratturi between \
         Abruzzo and Puglia, images of washing, branding and shearing sheep, \
         Bourbon travel permits, and counting devices for large flocks. The \
         life-size hut interior is GDA-Sala-6; domestic rural houses are \
         GDA-Sala-10.",
    ),
    (
        "GDA-Sala-6",
        "Life-size reconstruction of a stone tholos hut and how a shepherd lived \
         inside: corbelled stones forming a self-supporting dome without wood or \
         mortar, minimal furniture and tools for survival in harsh mountain \
         conditions, the arciclocco storage pole with hanging cauldrons and \
         friscelle for pecorino cheese-making. Also the stazzo, the mobile fence \
         enclosure protecting the flock at night and moved during transhumance or \
         monticazione, and how this existence forged Abruzzese frugality, \
         toughness and solidarity. Questions about shepherd character and identity \
         belong here rather than routes or contracts (GDA-Sala-5).",
    ),
    (
        "GDA-Galleria-Armi-Guerrieri",
        "Gallery tracing weapons, armor and warriors from the Copper Age through \
         the Bronze and Iron Ages to the Roman period and early Middle Ages, with \
         Abruzzo finds: blades, spearheads, helmets, shields and circular bronze \
         cuirasses of Italic warriors, the reconstructed grave 302 from the \
         necropolis of Fossa, and the panoply of a Longobard fighter. Hoplite \
         tactics, city-state armies, the professional Roman legion, and didactic \
         areas with replica equipment. Warfare, not peaceful rural life or \
         domestic crafts; general prehistory is GDA-Sala-1.",
    ),
    (
        "GDA-Sala-7",
        "Traditional cereal agriculture and the annual grain cycle in HISTORICAL \
         rural Abruzzo (early modern to 20th century): plowing, sowing a spaglio, \
         harvesting with sickles and finger thimbles, threshing with correggiati, \
         winnowing with wooden forks and shovels, measures for cereals, scarecrows \
         and storage. The world of contadini and sharecroppers — NOT Paleolithic \
         or Neolithic farmers or prehistoric food, which belong to GDA-Sala-1.",
    ),
    (
        "GDA-Sala-8",
        "Two sectors: traditional transport and olive cultivation with oil \
         production. Goods moved by women carrying loads on the head, mules with \
         decorated basti, wooden sleds for steep slopes and painted wagons. The \
         November olive harvest, the frantoio with stone mill, press, fiscoli and \
         hearth, oil as cooking fat, lamp fuel and remedy, plus mowing and hay \
         storage. Wine and pork production belong to GDA-Sala-9.",
    ),
    (
        "GDA-Sala-9",
        "Viticulture, winemaking and pig husbandry: from pre-Roman wine culture \
         and home-consumption vineyards to DOC labels like Montepulciano \
         d'Abruzzo, Cerasuolo, Trebbiano and Controguerra. Grape harvest in \
         baskets, pressing in stone or wooden mese, fermentation into novello, \
         oak barrels — then the slaughter and complete use of the pig: sausage \
         machines, preserved cuts, salting, smoking, oil and vinegar packing, \
         lard, blood puddings and preserved tomatoes. Olive oil is GDA-Sala-8; \
         grain is GDA-Sala-7.",
    ),
    (
        "GDA-Sala-10",
        "Rural housing and domestic life in mountain, hill and coastal Abruzzo: \
         stone houses embedded in rock, earth-and-straw dwellings, brick and tuff \
         constructions. Lower levels with stables, barns, cellars and storerooms; \
         upper domestic areas around the kitchen with fireplace, bread oven, \
         madia, beds with straw or wool mattresses, chests for trousseaux, \
         cradles and oil lamps; children's toys from recycled materials and the \
         heavy domestic workload of women. Pastoral huts are GDA-Sala-5 and \
         GDA-Sala-6; the Bourbon prison is GDA-Ceti-Urbani_Risorgimento.",
    ),
    (
        "GDA-Sala-11",
        "The complete production cycle of textile fibers, especially linen and \
         wool, as domestic and female work: sowing, harvesting, retting, drying, \
         breaking with wooden trocche, combing with ràscele, distaff and spindle, \
         the felarelle spinning wheel and household looms. Simple and patterned \
         linens, the wool tradition of Sulmona, Scanno and Taranta Peligna, and \
         tarante blankets with geometric and symbolic motifs. Techniques, not the \
         social rituals of wedding clothing (GDA-Sala-12).",
    ),
    (
        "GDA-Sala-12",
        "Marriage in traditional Abruzzo society: courtship, the formal promise, \
         the bride's corredo, and the transfer to the groom's house, expressed \
         through costumes and ornaments. Wedding and festive dresses, head \
         coverings signaling single, married or widowed status, the rare red \
         eighteenth-century gown from Scanno, filigree cannatora necklaces, \
         presentosa pendants, sciacquajje earrings, protective charms and \
         contromalucchie, silver buttons and buckles. Everyday textile production \
         is GDA-Sala-11.",
    ),
    (
        "GDA-Sala-13",
        "Abruzzese maiolica and ceramics from medieval times through the \
         Renaissance and Baroque: tin-glazed painted maiolica versus ingobbiata, \
         invetriata and graffita wares. Luxury tableware, pharmacy jars, \
         devotional plaques, the San Donato ceiling from Castelli, and the \
         ceramic towns of Castelli, Anversa degli Abruzzi, Tagliacozzo and Torre \
         de' Passeri, down to the later decline toward popular bowls, pitchers \
         and scaldamani. Ceramic art, not metalwork, textiles or jewelry.",
    ),
    (
        "GDA-Galleria-Territorio",
        "Panoramic gallery presenting Abruzzo as a museum in the open air: \
         landscapes from the Adriatic coast to the high Apennines, national and \
         regional parks, biodiversity, historic villages, artisanal traditions in \
         ceramics, metalwork, textiles and wood, eremi and monasteries, and the \
         network of castles and fortified sites. A territorial overview — the \
         region as a territory-museum — rather than one craft or social group.",
    ),
    (
        "GDA-Ceti-Urbani_Risorgimento",
        "The Bourbon prison of Pescara and the rise of urban bourgeois society \
         during the Risorgimento: young Abruzzese revolutionaries chained and \
         incarcerated between 1850 and 1860 for demands of Italian unity, \
         constitution and civil rights. Data on the bagno penale and its hundred \
         political prisoners, and bourgeois spaces — palatial houses, salotti, \
         cafés, theaters — where public opinion, the Carboneria and press freedom \
         took shape. Urban and political history, unlike the rural focus of most \
         other rooms.",
    ),
];

/// Look up the curated descriptor for a room, if any.
pub fn descriptor_for(room_id: &str) -> Option<&'static str> {
    ROOM_DESCRIPTIONS
        .iter()
        .find(|(rid, _)| *rid == room_id)
        .map(|(_, desc)| *desc)
}

//! Built-in vocabulary tables for Brazilian drug descriptions.

/// Token-level corrections of common ingredient misspellings.
pub const INGREDIENT_CORRECTIONS: &[(&str, &str)] = &[
    ("acilovir", "aciclovir"),
    ("amoxilina", "amoxicilina"),
    ("benzoilmetronidazol", "metronidazol"),
    ("cabidopa", "carbidopa"),
    ("carvedilo", "carvedilol"),
    ("cetamina", "escetamina"),
    ("clonazepan", "clonazepam"),
    ("deslanosido", "deslanosideo"),
    ("dexamatesona", "dexametasona"),
    ("dexametasoma", "dexametasona"),
    ("dexclorfemiramina", "dexclorfeniramina"),
    ("dexclofeniramina", "dexclorfeniramina"),
    ("dextrocetamina", "escetamina"),
    ("dimenitrato", "dimenidrinato"),
    ("diporina", "dipirona"),
    ("dolantina", "petidina"),
    ("enoxoparina", "enoxaparina"),
    ("espirolactona", "espironolactona"),
    ("estrogeno", "estrogenios"),
    ("estrogenos", "estrogenios"),
    ("folinico", "folico"),
    ("fomoterol", "formoterol"),
    ("hidroclotiazida", "hidroclorotiazida"),
    ("hidrocortizona", "hidrocortisona"),
    ("halpperidol", "haloperidol"),
    ("kcl", "potassio"),
    ("meloxican", "meloxicam"),
    ("meropnem", "meropenem"),
    ("metoclopamida", "metoclopramida"),
    ("metroninazol", "metronidazol"),
    ("midazolan", "midazolam"),
    ("nacl", "sodio"),
    ("ondasetrona", "ondansetrona"),
    ("oxcarbamazepin", "oxcarbazepina"),
    ("oxcarbamazepina", "oxcarbazepina"),
    ("oxitocina", "ocitocina"),
    ("piperaciclina", "piperacilina"),
    ("subactant", "sulbactam"),
    ("sulfametazol", "sulfametoxazol"),
    ("tenoxican", "tenoxicam"),
    ("trimetroprima", "trimetoprima"),
];

/// Tokens that hinder ingredient identification (salts, hydrates, connectives).
pub const INGREDIENT_STOPWORDS: &[&str] = &[
    "a", "acetato", "acido", "anidra", "benzatina", "besilato", "bicarbonato", "bidestilada",
    "bissulfato", "brometo", "bromidrato", "bultiprometo", "c", "calcica", "carbonato",
    "citrato", "clavulanato", "cloreto", "cloridrato", "com", "complexo", "d", "da", "de", "di",
    "dicloridrato", "diidratada", "diidratado", "dihidratada", "dihidratado", "dipropionato",
    "dinitrato", "dissodica", "dissodico", "divalproato", "do", "dos", "e", "em", "enantato",
    "esteril", "estolato", "forma", "fosfato", "fumarato", "g", "h", "hemi", "hemieptaidratada",
    "hemieptaidratado", "hemifumarato", "hemiidratado", "hemipentaidratado", "hemitartarato",
    "heptaidratado", "hexaidratado", "hidratada", "hidratado", "hidroxido", "lactato", "longa",
    "magnesica", "magnesico", "maleato", "membrana", "mesilato", "micronizada", "micronizado",
    "monofosfato", "monohidratada", "monoidratada", "monoidratado", "mononitrato", "mucato",
    "n", "o", "oxalato", "oxido", "p", "palmitato", "para", "pentahidratado", "pentaidratada",
    "pentaidratado", "pivoxila", "potassica", "s", "sem", "sesquiidratado", "sodica", "sodico",
    "succinato", "sulfato", "tartarato", "tetraidratado", "tipo", "tri", "tribasico",
    "triidratada", "triidratado", "trihidratada", "trihidratado", "v", "valerato", "valproato",
    "zincica",
];

/// Tokens that hinder presentation identification.
pub const PRESENTATION_STOPWORDS: &[&str] = &["embalagem", "agua", "de", "para", "sodio", "e"];

/// Presentation vocabulary abbreviations, following the ANVISA forms vocabulary.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("adaptador", "adapt"),
    ("adesivo", "ades"),
    ("aerossol", "aer"),
    ("agulha", "agu"),
    ("aluminio", "al"),
    ("ambar", "amb"),
    ("ampola", "amp"),
    ("anel", "anel"),
    ("aplicador", "aplic"),
    ("aplicadora", "aplic"),
    ("ativador", "ativ"),
    ("barra", "bar"),
    ("bastao", "bast"),
    ("bisnaga", "bg"),
    ("blister", "bl"),
    ("bolsa", "bols"),
    ("bombeador", "bomb"),
    ("bombona", "bombo"),
    ("bucal", "buc"),
    ("camara", "cam"),
    ("caneta", "can"),
    ("capsula", "cap"),
    ("capilar", "capi"),
    ("carpule", "car"),
    ("conta", "cgt"),
    ("cilindro", "cil"),
    ("colher", "col"),
    ("colutorio", "colut"),
    ("comprimido", "com"),
    ("copo", "cop"),
    ("creme", "crem"),
    ("cartucho", "ct"),
    ("caixa", "cx"),
    ("dermatologica", "derm"),
    ("dermatologico", "derm"),
    ("diluente", "dil"),
    ("diluicao", "dil"),
    ("uterino", "diu"),
    ("dosadora", "dos"),
    ("dura", "dura"),
    ("efervescente", "efev"),
    ("elixir", "elx"),
    ("emplasto", "empl"),
    ("envelope", "env"),
    ("epidural", "epi"),
    ("esmalte", "esm"),
    ("espatula", "esp"),
    ("espuma", "esp"),
    ("espacador", "espac"),
    ("estojo", "est"),
    ("frasco-ampola", "fa"),
    ("fechado", "fech"),
    ("filme", "fil"),
    ("flaconete", "flac"),
    ("frasco", "fr"),
    ("gas", "gas"),
    ("gel", "gel"),
    ("globulo", "glob"),
    ("gomosa", "gom"),
    ("goma", "goma"),
    ("gotas", "got"),
    ("gotejador", "got"),
    ("granulado", "gran"),
    ("articular", "ia"),
    ("arterial", "iar"),
    ("intradermica", "id"),
    ("intramuscular", "im"),
    ("implante", "impl"),
    ("inalacao", "inal"),
    ("inalador", "inal"),
    ("inaladora", "inal"),
    ("inalatoria", "inal"),
    ("infusao", "infus"),
    ("injetavel", "inj"),
    ("irrigacao", "irr"),
    ("intratecal", "it"),
    ("intrauterina", "iu"),
    ("intravenosa", "iv"),
    ("lamina", "lam"),
    ("lenco", "len"),
    ("liberacao", "lib"),
    ("liofilo", "liof"),
    ("liofilizado", "liof"),
    ("liquido", "liq"),
    ("mastigavel", "mast"),
    ("metal", "met"),
    ("emulsao", "meu"),
    ("modificada", "mod"),
    ("mole", "mole"),
    ("nasal", "nas"),
    ("oftalmica", "oft"),
    ("oleo", "ole"),
    ("opaco", "opc"),
    ("oral", "or"),
    ("orodispersivel", "orodisp"),
    ("otologica", "oto"),
    ("ovulo", "ovl"),
    ("papel", "pap"),
    ("pastinha", "pas"),
    ("pasta", "past"),
    ("pincel", "pinc"),
    ("plastico", "plas"),
    ("po", "po"),
    ("pomada", "pom"),
    ("preenchida", "preenc"),
    ("preenchido", "preenc"),
    ("prolongada", "prol"),
    ("pote", "pt"),
    ("rasura", "ras"),
    ("retal", "ret"),
    ("retardada", "retard"),
    ("revestido", "rev"),
    ("sabonete", "sab"),
    ("subcutanea", "sc"),
    ("seringa", "ser"),
    ("sistema", "sist"),
    ("solucao", "sol"),
    ("spray", "spr"),
    ("strip", "str"),
    ("sublingual", "subl"),
    ("supositorio", "sup"),
    ("suspensao", "sus"),
    ("suspencao", "sus"),
    ("tablete", "table"),
    ("tubo", "tb"),
    ("termica", "term"),
    ("transparente", "trans"),
    ("transdermica", "transd"),
    ("transferencia", "transf"),
    ("translucido", "transl"),
    ("uretral", "uret"),
    ("vaginal", "vag"),
    ("valcula", "valv"),
    ("vidro", "vd"),
    ("xampu", "xamp"),
    ("xarope", "xpe"),
];

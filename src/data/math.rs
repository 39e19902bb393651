//! Math symbol mappings (amssymb / unicode-math names)
//!
//! Entries whose reverse direction would be ambiguous are split into a
//! forward-only and a reverse-only half. `‖` (U+2016) is written as `\Vert`,
//! but `\Vert` reads back as `∥` (U+2225), the code point `\parallel` names.

use super::tables::MappingEntry;

pub static MATH_SYMBOLS: &[MappingEntry] = &[
    // Binary operators
    MappingEntry::both('×', "\\times"),
    MappingEntry::both('÷', "\\div"),
    MappingEntry::both('±', "\\pm"),
    MappingEntry::both('∓', "\\mp"),
    MappingEntry::both('·', "\\cdot"),
    MappingEntry::both('⋅', "\\cdotp"),
    MappingEntry::both('∘', "\\circ"),
    MappingEntry::both('∙', "\\bullet"),
    MappingEntry::both('⋆', "\\star"),
    MappingEntry::both('∗', "\\ast"),
    MappingEntry::both('∖', "\\setminus"),
    MappingEntry::both('∩', "\\cap"),
    MappingEntry::both('∪', "\\cup"),
    MappingEntry::both('⊎', "\\uplus"),
    MappingEntry::both('⊓', "\\sqcap"),
    MappingEntry::both('⊔', "\\sqcup"),
    MappingEntry::both('∧', "\\wedge"),
    MappingEntry::both('∨', "\\vee"),
    MappingEntry::both('⊕', "\\oplus"),
    MappingEntry::both('⊖', "\\ominus"),
    MappingEntry::both('⊗', "\\otimes"),
    MappingEntry::both('⊘', "\\oslash"),
    MappingEntry::both('⊙', "\\odot"),
    MappingEntry::both('†', "\\dagger"),
    MappingEntry::both('‡', "\\ddagger"),
    MappingEntry::both('≀', "\\wr"),
    MappingEntry::both('⋄', "\\diamond"),
    MappingEntry::both('△', "\\bigtriangleup"),
    MappingEntry::both('▽', "\\bigtriangledown"),
    MappingEntry::both('◁', "\\triangleleft"),
    MappingEntry::both('▷', "\\triangleright"),
    MappingEntry::both('⋉', "\\ltimes"),
    MappingEntry::both('⋊', "\\rtimes"),
    MappingEntry::both('⊠', "\\boxtimes"),
    MappingEntry::both('⊞', "\\boxplus"),
    MappingEntry::both('⊟', "\\boxminus"),
    MappingEntry::both('⊡', "\\boxdot"),
    MappingEntry::both('∔', "\\dotplus"),
    MappingEntry::both('⋒', "\\Cap"),
    MappingEntry::both('⋓', "\\Cup"),
    MappingEntry::both('⊼', "\\barwedge"),
    MappingEntry::both('⊻', "\\veebar"),
    MappingEntry::both('⋋', "\\leftthreetimes"),
    MappingEntry::both('⋌', "\\rightthreetimes"),
    MappingEntry::both('⊺', "\\intercal"),
    // Relations
    MappingEntry::both('≤', "\\leq"),
    MappingEntry::both('≥', "\\geq"),
    MappingEntry::both('≠', "\\neq"),
    MappingEntry::reverse_only('≤', "\\le"),
    MappingEntry::reverse_only('≥', "\\ge"),
    MappingEntry::reverse_only('≠', "\\ne"),
    MappingEntry::both('≪', "\\ll"),
    MappingEntry::both('≫', "\\gg"),
    MappingEntry::both('≡', "\\equiv"),
    MappingEntry::both('≢', "\\nequiv"),
    MappingEntry::both('≈', "\\approx"),
    MappingEntry::both('≊', "\\approxeq"),
    MappingEntry::both('∼', "\\sim"),
    MappingEntry::both('≃', "\\simeq"),
    MappingEntry::both('≅', "\\cong"),
    MappingEntry::both('≍', "\\asymp"),
    MappingEntry::both('∝', "\\propto"),
    MappingEntry::both('≐', "\\doteq"),
    MappingEntry::both('≜', "\\triangleq"),
    MappingEntry::both('≺', "\\prec"),
    MappingEntry::both('≻', "\\succ"),
    MappingEntry::both('⪯', "\\preceq"),
    MappingEntry::both('⪰', "\\succeq"),
    MappingEntry::both('⊂', "\\subset"),
    MappingEntry::both('⊃', "\\supset"),
    MappingEntry::both('⊆', "\\subseteq"),
    MappingEntry::both('⊇', "\\supseteq"),
    MappingEntry::both('⊊', "\\subsetneq"),
    MappingEntry::both('⊋', "\\supsetneq"),
    MappingEntry::both('⊄', "\\nsubset"),
    MappingEntry::both('⊈', "\\nsubseteq"),
    MappingEntry::both('⊉', "\\nsupseteq"),
    MappingEntry::both('⊏', "\\sqsubset"),
    MappingEntry::both('⊐', "\\sqsupset"),
    MappingEntry::both('⊑', "\\sqsubseteq"),
    MappingEntry::both('⊒', "\\sqsupseteq"),
    MappingEntry::both('∈', "\\in"),
    MappingEntry::both('∉', "\\notin"),
    MappingEntry::both('∋', "\\ni"),
    MappingEntry::both('⊢', "\\vdash"),
    MappingEntry::both('⊣', "\\dashv"),
    MappingEntry::both('⊨', "\\models"),
    MappingEntry::both('⊩', "\\Vdash"),
    MappingEntry::both('⊥', "\\perp"),
    MappingEntry::both('∣', "\\mid"),
    MappingEntry::both('∤', "\\nmid"),
    MappingEntry::both('∥', "\\parallel"),
    MappingEntry::both('∦', "\\nparallel"),
    MappingEntry::forward_only('‖', "\\Vert"),
    MappingEntry::reverse_only('∥', "\\Vert"),
    MappingEntry::both('⋈', "\\bowtie"),
    MappingEntry::both('⌣', "\\smile"),
    MappingEntry::both('⌢', "\\frown"),
    MappingEntry::both('≮', "\\nless"),
    MappingEntry::both('≯', "\\ngtr"),
    MappingEntry::both('≰', "\\nleq"),
    MappingEntry::both('≱', "\\ngeq"),
    MappingEntry::both('≲', "\\lesssim"),
    MappingEntry::both('≳', "\\gtrsim"),
    MappingEntry::both('≶', "\\lessgtr"),
    MappingEntry::both('≷', "\\gtrless"),
    MappingEntry::both('⋖', "\\lessdot"),
    MappingEntry::both('⋗', "\\gtrdot"),
    MappingEntry::both('≁', "\\nsim"),
    MappingEntry::both('≆', "\\ncong"),
    MappingEntry::both('∴', "\\therefore"),
    MappingEntry::both('∵', "\\because"),
    MappingEntry::both('≬', "\\between"),
    MappingEntry::both('⋔', "\\pitchfork"),
    MappingEntry::both('⊲', "\\vartriangleleft"),
    MappingEntry::both('⊳', "\\vartriangleright"),
    MappingEntry::both('⊴', "\\trianglelefteq"),
    MappingEntry::both('⊵', "\\trianglerighteq"),
    // Arrows
    MappingEntry::both('←', "\\leftarrow"),
    MappingEntry::both('→', "\\rightarrow"),
    MappingEntry::reverse_only('→', "\\to"),
    MappingEntry::reverse_only('←', "\\gets"),
    MappingEntry::both('↑', "\\uparrow"),
    MappingEntry::both('↓', "\\downarrow"),
    MappingEntry::both('↔', "\\leftrightarrow"),
    MappingEntry::both('↕', "\\updownarrow"),
    MappingEntry::both('⇐', "\\Leftarrow"),
    MappingEntry::both('⇒', "\\Rightarrow"),
    MappingEntry::both('⇑', "\\Uparrow"),
    MappingEntry::both('⇓', "\\Downarrow"),
    MappingEntry::both('⇔', "\\iff"),
    MappingEntry::reverse_only('⇔', "\\Leftrightarrow"),
    MappingEntry::both('⇕', "\\Updownarrow"),
    MappingEntry::both('↦', "\\mapsto"),
    MappingEntry::both('⟼', "\\longmapsto"),
    MappingEntry::both('⟵', "\\longleftarrow"),
    MappingEntry::both('⟶', "\\longrightarrow"),
    MappingEntry::both('⟷', "\\longleftrightarrow"),
    MappingEntry::both('⟸', "\\Longleftarrow"),
    MappingEntry::both('⟹', "\\Longrightarrow"),
    MappingEntry::both('⟺', "\\Longleftrightarrow"),
    MappingEntry::both('↗', "\\nearrow"),
    MappingEntry::both('↘', "\\searrow"),
    MappingEntry::both('↙', "\\swarrow"),
    MappingEntry::both('↖', "\\nwarrow"),
    MappingEntry::both('↩', "\\hookleftarrow"),
    MappingEntry::both('↪', "\\hookrightarrow"),
    MappingEntry::both('↼', "\\leftharpoonup"),
    MappingEntry::both('↽', "\\leftharpoondown"),
    MappingEntry::both('⇀', "\\rightharpoonup"),
    MappingEntry::both('⇁', "\\rightharpoondown"),
    MappingEntry::both('⇌', "\\rightleftharpoons"),
    MappingEntry::both('⇄', "\\rightleftarrows"),
    MappingEntry::both('⇆', "\\leftrightarrows"),
    MappingEntry::both('↞', "\\twoheadleftarrow"),
    MappingEntry::both('↠', "\\twoheadrightarrow"),
    MappingEntry::both('↣', "\\rightarrowtail"),
    MappingEntry::both('↢', "\\leftarrowtail"),
    MappingEntry::both('↺', "\\circlearrowleft"),
    MappingEntry::both('↻', "\\circlearrowright"),
    MappingEntry::both('↶', "\\curvearrowleft"),
    MappingEntry::both('↷', "\\curvearrowright"),
    MappingEntry::both('⇚', "\\Lleftarrow"),
    MappingEntry::both('⇛', "\\Rrightarrow"),
    MappingEntry::both('↚', "\\nleftarrow"),
    MappingEntry::both('↛', "\\nrightarrow"),
    MappingEntry::both('⇍', "\\nLeftarrow"),
    MappingEntry::both('⇏', "\\nRightarrow"),
    MappingEntry::both('↮', "\\nleftrightarrow"),
    MappingEntry::both('⇎', "\\nLeftrightarrow"),
    // Large operators
    MappingEntry::both('∑', "\\sum"),
    MappingEntry::both('∏', "\\prod"),
    MappingEntry::both('∐', "\\coprod"),
    MappingEntry::both('∫', "\\int"),
    MappingEntry::both('∬', "\\iint"),
    MappingEntry::both('∭', "\\iiint"),
    MappingEntry::both('∮', "\\oint"),
    MappingEntry::both('⋀', "\\bigwedge"),
    MappingEntry::both('⋁', "\\bigvee"),
    MappingEntry::both('⋂', "\\bigcap"),
    MappingEntry::both('⋃', "\\bigcup"),
    MappingEntry::both('⨁', "\\bigoplus"),
    MappingEntry::both('⨂', "\\bigotimes"),
    MappingEntry::both('⨀', "\\bigodot"),
    MappingEntry::both('⨄', "\\biguplus"),
    // Miscellaneous symbols
    MappingEntry::both('∞', "\\infty"),
    MappingEntry::both('∂', "\\partial"),
    MappingEntry::both('∇', "\\nabla"),
    MappingEntry::both('∀', "\\forall"),
    MappingEntry::both('∃', "\\exists"),
    MappingEntry::both('∄', "\\nexists"),
    MappingEntry::both('∅', "\\emptyset"),
    MappingEntry::both('⌀', "\\diameter"),
    MappingEntry::reverse_only('∅', "\\varnothing"),
    MappingEntry::both('¬', "\\neg"),
    MappingEntry::reverse_only('¬', "\\lnot"),
    MappingEntry::both('ℵ', "\\aleph"),
    MappingEntry::both('ℶ', "\\beth"),
    MappingEntry::both('ℷ', "\\gimel"),
    MappingEntry::both('ℏ', "\\hbar"),
    MappingEntry::both('ℑ', "\\Im"),
    MappingEntry::both('ℜ', "\\Re"),
    MappingEntry::both('℘', "\\wp"),
    MappingEntry::both('∠', "\\angle"),
    MappingEntry::both('∡', "\\measuredangle"),
    MappingEntry::both('∢', "\\sphericalangle"),
    MappingEntry::both('′', "\\prime"),
    MappingEntry::both('″', "\\dprime"),
    MappingEntry::both('‵', "\\backprime"),
    MappingEntry::both('⊤', "\\top"),
    MappingEntry::both('♠', "\\spadesuit"),
    MappingEntry::both('♡', "\\heartsuit"),
    MappingEntry::both('♢', "\\diamondsuit"),
    MappingEntry::both('♣', "\\clubsuit"),
    MappingEntry::both('♭', "\\flat"),
    MappingEntry::both('♮', "\\natural"),
    MappingEntry::both('♯', "\\sharp"),
    MappingEntry::both('□', "\\square"),
    MappingEntry::both('■', "\\blacksquare"),
    MappingEntry::both('◊', "\\lozenge"),
    MappingEntry::both('★', "\\bigstar"),
    MappingEntry::both('✓', "\\checkmark"),
    MappingEntry::both('✠', "\\maltese"),
    MappingEntry::both('⋯', "\\cdots"),
    MappingEntry::both('⋮', "\\vdots"),
    MappingEntry::both('⋱', "\\ddots"),
    MappingEntry::both('°', "\\degree"),
    MappingEntry::both('℧', "\\mho"),
    MappingEntry::both('ð', "\\eth"),
    MappingEntry::both('ı', "\\imath"),
    MappingEntry::both('ȷ', "\\jmath"),
    MappingEntry::both('ℓ', "\\ell"),
    MappingEntry::both('∁', "\\complement"),
    MappingEntry::forward_only('√', "\\sqrt"),
    MappingEntry::both('∛', "\\cuberoot"),
    MappingEntry::both('∜', "\\fourthroot"),
    // Delimiters
    MappingEntry::both('⟨', "\\langle"),
    MappingEntry::both('⟩', "\\rangle"),
    MappingEntry::both('⌈', "\\lceil"),
    MappingEntry::both('⌉', "\\rceil"),
    MappingEntry::both('⌊', "\\lfloor"),
    MappingEntry::both('⌋', "\\rfloor"),
    MappingEntry::both('⟦', "\\llbracket"),
    MappingEntry::both('⟧', "\\rrbracket"),
    MappingEntry::both('⌜', "\\ulcorner"),
    MappingEntry::both('⌝', "\\urcorner"),
    MappingEntry::both('⌞', "\\llcorner"),
    MappingEntry::both('⌟', "\\lrcorner"),
    // Text symbols that live in the math table
    MappingEntry::both('«', "\\guillemotleft"),
    MappingEntry::both('»', "\\guillemotright"),
    MappingEntry::both('‹', "\\guilsinglleft"),
    MappingEntry::both('›', "\\guilsinglright"),
    MappingEntry::both('€', "\\euro"),
    MappingEntry::both('¥', "\\yen"),
    MappingEntry::both('®', "\\textregistered"),
    MappingEntry::both('™', "\\texttrademark"),
    MappingEntry::both('•', "\\textbullet"),
    MappingEntry::forward_only('—', "---"),
    MappingEntry::forward_only('−', "-"),
];
